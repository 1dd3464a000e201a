use crate::sections::Section;

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn max_scroll(&self) -> f64 {
        self.scroll_height - self.viewport_height
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SectionBounds {
    pub offset_top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(offset_top: f64, height: f64) -> Self {
        Self { offset_top, height }
    }

    /// Half-open: the bottom edge belongs to the next section.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.offset_top && position < self.offset_top + self.height
    }
}

/// Live view of the page geometry. Nothing here is cached; callers measure
/// on every event because layout shifts on resize and late content loads.
pub trait LayoutProbe {
    fn scroll_metrics(&self) -> ScrollMetrics;

    /// `None` when the section's element is not mounted.
    fn section_bounds(&self, section: Section) -> Option<SectionBounds>;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::{cell::RefCell, collections::HashMap};

    /// Hand-built page geometry for tests.
    #[derive(Default)]
    pub struct FakeLayout {
        pub metrics: RefCell<ScrollMetrics>,
        pub bounds: RefCell<HashMap<Section, SectionBounds>>,
    }

    impl FakeLayout {
        pub fn with_sections(scroll_height: f64, viewport_height: f64, sections: &[(Section, f64, f64)]) -> Self {
            let layout = Self::default();
            *layout.metrics.borrow_mut() = ScrollMetrics {
                scroll_top: 0.0,
                scroll_height,
                viewport_height,
            };
            for (section, top, height) in sections {
                layout
                    .bounds
                    .borrow_mut()
                    .insert(*section, SectionBounds::new(*top, *height));
            }
            layout
        }

        pub fn scroll_to(&self, scroll_top: f64) {
            self.metrics.borrow_mut().scroll_top = scroll_top;
        }

        pub fn unmount(&self, section: Section) {
            self.bounds.borrow_mut().remove(&section);
        }
    }

    impl LayoutProbe for FakeLayout {
        fn scroll_metrics(&self) -> ScrollMetrics {
            *self.metrics.borrow()
        }

        fn section_bounds(&self, section: Section) -> Option<SectionBounds> {
            self.bounds.borrow().get(&section).copied()
        }
    }
}
