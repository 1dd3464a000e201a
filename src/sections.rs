use crate::layout::{LayoutProbe, SectionBounds};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Section {
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// DOM id of the section's anchor element.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "home" => Some(Self::Home),
            "about" => Some(Self::About),
            "projects" => Some(Self::Projects),
            "skills" => Some(Self::Skills),
            "contact" => Some(Self::Contact),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Contact => "Contact",
        }
    }
}

/// Ordered set of navigable sections, in document order.
#[derive(Clone, PartialEq, Debug)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::new(Section::ALL)
    }
}

impl SectionRegistry {
    /// Later duplicates are dropped so identifiers stay unique.
    pub fn new(sections: impl IntoIterator<Item = Section>) -> Self {
        let mut ordered: Vec<Section> = Vec::new();
        for section in sections {
            if !ordered.contains(&section) {
                ordered.push(section);
            }
        }
        Self { sections: ordered }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn resolve(&self, id: &str) -> Option<Section> {
        Section::from_str(id).filter(|section| self.sections.contains(section))
    }

    pub fn measure(&self, id: &str, probe: &impl LayoutProbe) -> Option<SectionBounds> {
        probe.section_bounds(self.resolve(id)?)
    }

    /// First registered section whose bounds contain `position`. Unmounted
    /// sections are skipped.
    pub fn first_containing(&self, position: f64, probe: &impl LayoutProbe) -> Option<Section> {
        self.sections.iter().copied().find(|section| {
            probe
                .section_bounds(*section)
                .is_some_and(|bounds| bounds.contains(position))
        })
    }
}
