/// Inline stand-ins for the icon set used across the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    BarChart,
    TrendingUp,
    Code,
    Sparkles,
    ArrowRight,
    Mail,
    Github,
    Linkedin,
    MousePointer,
    ChevronDown,
    Star,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::BarChart => "▥",
            Self::TrendingUp => "↗",
            Self::Code => "</>",
            Self::Sparkles => "✦",
            Self::ArrowRight => "→",
            Self::Mail => "✉",
            Self::Github => "⌥",
            Self::Linkedin => "in",
            Self::MousePointer => "⌖",
            Self::ChevronDown => "⌄",
            Self::Star => "★",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    /// Tailwind gradient stops shared by the icon tile and the card overlay.
    pub gradient: &'static str,
    pub delay_ms: u32,
}

pub const SKILLS: [Skill; 3] = [
    Skill {
        icon: Icon::BarChart,
        title: "Data Analysis",
        description: "Uncovering patterns and driving decisions through intelligent data storytelling",
        gradient: "from-blue-500 via-purple-500 to-indigo-600",
        delay_ms: 0,
    },
    Skill {
        icon: Icon::TrendingUp,
        title: "Business Analysis",
        description: "Aligning business goals with actionable insights to fuel strategic growth",
        gradient: "from-green-500 via-emerald-500 to-teal-600",
        delay_ms: 400,
    },
    Skill {
        icon: Icon::Code,
        title: "Full Stack Development",
        description: "Engineering robust, end-to-end digital experiences with precision and creativity",
        gradient: "from-pink-500 via-rose-500 to-red-600",
        delay_ms: 200,
    },
];

pub const NAV_LABELS: [&str; 4] = ["Home", "About", "Projects", "Contact"];

pub fn nav_href(label: &str) -> String {
    format!("#{}", label.to_lowercase())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
    pub hover_class: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub",
        href: "#",
        icon: Icon::Github,
        hover_class: "hover:text-purple-400",
    },
    SocialLink {
        label: "LinkedIn",
        href: "#",
        icon: Icon::Linkedin,
        hover_class: "hover:text-blue-400",
    },
    SocialLink {
        label: "Email",
        href: "#",
        icon: Icon::Mail,
        hover_class: "hover:text-pink-400",
    },
];

pub const BRAND: &str = "Portfolio";
pub const HERO_TITLE: (&str, &str) = ("Data", "Analyst");
pub const HERO_LEAD: (&str, &str, &str) = (
    "I craft ",
    "extraordinary digital experiences",
    " with clean code, stunning design, and seamless interactions that captivate and inspire.",
);
pub const PRIMARY_CTA: &str = "View My Work";
pub const SECONDARY_CTA: &str = "Get In Touch";
pub const SKILLS_BADGE: &str = "What I Excel At";
pub const SKILLS_HEADING: (&str, &str) = ("Expertise &", "Innovation");
pub const SKILLS_LEAD: &str =
    "Transforming complex challenges into elegant solutions with cutting-edge technology";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_hrefs_are_lowercase_anchors() {
        let hrefs: Vec<String> = NAV_LABELS.iter().map(|label| nav_href(label)).collect();

        assert_eq!(hrefs, vec!["#home", "#about", "#projects", "#contact"]);
    }

    #[test]
    fn skills_keep_their_stagger_order() {
        let delays: Vec<u32> = SKILLS.iter().map(|skill| skill.delay_ms).collect();

        assert_eq!(delays, vec![0, 400, 200]);
        assert!(SKILLS.iter().all(|skill| !skill.gradient.is_empty()));
    }

    #[test]
    fn icon_glyphs_are_distinct() {
        let icons = [
            Icon::BarChart,
            Icon::TrendingUp,
            Icon::Code,
            Icon::Sparkles,
            Icon::ArrowRight,
            Icon::Mail,
            Icon::Github,
            Icon::Linkedin,
            Icon::MousePointer,
            Icon::ChevronDown,
            Icon::Star,
        ];
        let glyphs: std::collections::HashSet<&str> = icons.iter().map(|icon| icon.glyph()).collect();

        assert_eq!(glyphs.len(), icons.len());
        assert!(glyphs.iter().all(|glyph| !glyph.is_empty()));
    }

    #[test]
    fn social_links_use_their_brand_icons() {
        let icons: Vec<Icon> = SOCIAL_LINKS.iter().map(|social| social.icon).collect();

        assert_eq!(icons, vec![Icon::Github, Icon::Linkedin, Icon::Mail]);
    }
}
