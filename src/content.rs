#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProjectCategory {
    React,
    Angular,
    NextJs,
}

impl ProjectCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Angular => "angular",
            Self::NextJs => "nextjs",
        }
    }
}

/// A project filter; `None` shows everything.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ProjectFilter(pub Option<ProjectCategory>);

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 4] = [
        ProjectFilter(None),
        ProjectFilter(Some(ProjectCategory::React)),
        ProjectFilter(Some(ProjectCategory::Angular)),
        ProjectFilter(Some(ProjectCategory::NextJs)),
    ];

    pub fn id(self) -> &'static str {
        self.0.map(ProjectCategory::as_str).unwrap_or("all")
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            None => "All Projects",
            Some(ProjectCategory::React) => "React",
            Some(ProjectCategory::Angular) => "Angular",
            Some(ProjectCategory::NextJs) => "Next.js",
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        self.0.map_or(true, |category| project.category == category)
    }

    pub fn count(self, projects: &[Project]) -> usize {
        projects.iter().filter(|project| self.matches(project)).count()
    }

    pub fn apply(self, projects: &'static [Project]) -> impl Iterator<Item = &'static Project> {
        projects.iter().filter(move |project| self.matches(project))
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub category: ProjectCategory,
    pub technologies: &'static [&'static str],
    pub featured: bool,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Dashboard",
        description: "Admin dashboard with real-time analytics, inventory management, and order tracking.",
        category: ProjectCategory::React,
        technologies: &["React", "TypeScript", "Tailwind CSS", "Chart.js"],
        featured: true,
    },
    Project {
        title: "Task Management App",
        description: "Collaborative task board with drag-and-drop, team spaces, and progress tracking.",
        category: ProjectCategory::Angular,
        technologies: &["Angular", "TypeScript", "Angular Material", "RxJS"],
        featured: true,
    },
    Project {
        title: "Restaurant Website",
        description: "Responsive restaurant site with online reservations, menu showcase, and reviews.",
        category: ProjectCategory::NextJs,
        technologies: &["Next.js", "React", "Tailwind CSS", "Framer Motion"],
        featured: false,
    },
    Project {
        title: "Portfolio Website",
        description: "Personal site with scroll-driven animations, project showcase, and a contact form.",
        category: ProjectCategory::React,
        technologies: &["React", "GSAP", "Styled Components", "Netlify"],
        featured: false,
    },
    Project {
        title: "Weather App",
        description: "Real-time weather with geolocation, a seven-day forecast, and animated conditions.",
        category: ProjectCategory::Angular,
        technologies: &["Angular", "TypeScript", "OpenWeather API", "CSS Animations"],
        featured: false,
    },
    Project {
        title: "Blog Platform",
        description: "Full-stack blog with markdown posts, comments, and author management.",
        category: ProjectCategory::NextJs,
        technologies: &["Next.js", "React", "MongoDB", "Next-Auth"],
        featured: true,
    },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub years: &'static str,
}

impl Skill {
    pub fn proficiency(&self) -> &'static str {
        match self.level {
            90..=u8::MAX => "Expert",
            80..=89 => "Advanced",
            70..=79 => "Intermediate",
            _ => "Beginner",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SkillGroup {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, level: u8, years: &'static str) -> Skill {
    Skill { name, level, years }
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        id: "frontend",
        title: "Frontend Development",
        icon: "🎨",
        skills: &[
            skill("React", 80, "2+"),
            skill("Angular", 85, "2+"),
            skill("Next.js", 80, "1+"),
            skill("TypeScript", 85, "2+"),
            skill("JavaScript", 90, "2+"),
            skill("HTML5", 95, "2+"),
            skill("CSS3", 90, "2+"),
            skill("Tailwind CSS", 85, "1+"),
        ],
    },
    SkillGroup {
        id: "tools",
        title: "Tools & Technologies",
        icon: "🛠",
        skills: &[
            skill("Git & GitHub", 85, "2+"),
            skill("VS Code", 95, "2+"),
            skill("Figma", 75, "1+"),
            skill("Webpack", 70, "1+"),
            skill("Vite", 80, "1+"),
            skill("Chrome DevTools", 90, "2+"),
        ],
    },
    SkillGroup {
        id: "concepts",
        title: "Core Concepts",
        icon: "💡",
        skills: &[
            skill("Responsive Design", 95, "2+"),
            skill("Component Architecture", 90, "2+"),
            skill("State Management", 85, "1+"),
            skill("API Integration", 80, "1+"),
            skill("Performance Optimization", 75, "1+"),
            skill("Accessibility", 68, "1+"),
        ],
    },
];

pub fn skill_group(id: &str) -> Option<&'static SkillGroup> {
    SKILL_GROUPS.iter().find(|group| group.id == id)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: "✉",
        title: "Email",
        value: "hello@example.com",
        href: "mailto:hello@example.com",
    },
    ContactChannel {
        icon: "in",
        title: "LinkedIn",
        value: "linkedin.com/in/example",
        href: "https://www.linkedin.com/in/example",
    },
    ContactChannel {
        icon: "gh",
        title: "GitHub",
        value: "github.com/example",
        href: "https://github.com/example",
    },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "LinkedIn",
        icon: "💼",
        href: "https://www.linkedin.com/in/example",
    },
    SocialLink {
        name: "Facebook",
        icon: "📘",
        href: "https://www.facebook.com/example",
    },
    SocialLink {
        name: "Email",
        icon: "📧",
        href: "mailto:hello@example.com",
    },
    SocialLink {
        name: "Phone",
        icon: "📱",
        href: "tel:+15550100",
    },
];

impl SocialLink {
    /// Web profiles open in a new tab; `mailto:` and `tel:` stay in place.
    pub fn opens_new_tab(&self) -> bool {
        self.href.starts_with("https://")
    }
}

/// One labelled face of the hero cube.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CubeFace {
    pub label: &'static str,
    pub tone: &'static str,
    pub transform: &'static str,
}

pub const CUBE_FACES: [CubeFace; 6] = [
    CubeFace {
        label: "Frontend Developer",
        tone: "blue",
        transform: "rotateY(0deg) translateZ(150px)",
    },
    CubeFace {
        label: "Clean, Reusable Code",
        tone: "purple",
        transform: "rotateY(180deg) translateZ(150px)",
    },
    CubeFace {
        label: "From Design to Code",
        tone: "cyan",
        transform: "rotateY(90deg) translateZ(150px)",
    },
    CubeFace {
        label: "Build with ReactJS / NextJS",
        tone: "pink",
        transform: "rotateY(-90deg) translateZ(150px)",
    },
    CubeFace {
        label: "Fast & Responsive",
        tone: "green",
        transform: "rotateX(90deg) translateZ(150px)",
    },
    CubeFace {
        label: "Build Modern Websites",
        tone: "orange",
        transform: "rotateX(-90deg) translateZ(150px)",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_filter_yields_every_project() {
        let all = ProjectFilter(None);
        assert_eq!(all.apply(PROJECTS).count(), PROJECTS.len());
        assert_eq!(all.id(), "all");
    }

    #[test]
    fn category_counts_sum_to_total() {
        let per_category: usize = ProjectFilter::ALL[1..]
            .iter()
            .map(|filter| filter.count(PROJECTS))
            .sum();
        assert_eq!(per_category, PROJECTS.len());

        let react = ProjectFilter(Some(ProjectCategory::React));
        assert!(react
            .apply(PROJECTS)
            .all(|project| project.category == ProjectCategory::React));
    }

    #[test]
    fn proficiency_labels_follow_level_bands() {
        assert_eq!(skill("a", 95, "").proficiency(), "Expert");
        assert_eq!(skill("b", 90, "").proficiency(), "Expert");
        assert_eq!(skill("c", 89, "").proficiency(), "Advanced");
        assert_eq!(skill("d", 70, "").proficiency(), "Intermediate");
        assert_eq!(skill("e", 69, "").proficiency(), "Beginner");
    }

    #[test]
    fn skill_groups_resolve_by_id() {
        assert_eq!(skill_group("tools").map(|group| group.title), Some("Tools & Technologies"));
        assert!(skill_group("soft-skills").is_none());
    }

    #[test]
    fn social_links_cover_profiles_mail_and_phone() {
        let names: Vec<_> = SOCIAL_LINKS.iter().map(|link| link.name).collect();
        assert_eq!(names, ["LinkedIn", "Facebook", "Email", "Phone"]);

        let new_tab: Vec<_> = SOCIAL_LINKS
            .iter()
            .filter(|link| link.opens_new_tab())
            .map(|link| link.name)
            .collect();
        assert_eq!(new_tab, ["LinkedIn", "Facebook"]);
    }

    #[test]
    fn cube_faces_point_six_different_ways() {
        let mut transforms: Vec<_> = CUBE_FACES.iter().map(|face| face.transform).collect();
        transforms.sort_unstable();
        transforms.dedup();
        assert_eq!(transforms.len(), 6);
        assert!(CUBE_FACES.iter().all(|face| face.transform.ends_with("translateZ(150px)")));
    }
}
