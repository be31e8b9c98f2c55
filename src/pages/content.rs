//! Static copy for the landing page.

use crate::scroll::ImageSlot;

pub const SECTION_TECHNOLOGY: &str = "technology";
pub const SECTION_DEMO: &str = "demo";
pub const SECTION_FEATURES: &str = "features";
pub const SECTION_SOLUTIONS: &str = "solutions";
pub const SECTION_CONTACT: &str = "contact";

/// Every anchor the page renders, in document order.
pub const SECTION_IDS: [&str; 5] = [
    SECTION_TECHNOLOGY,
    SECTION_DEMO,
    SECTION_FEATURES,
    SECTION_SOLUTIONS,
    SECTION_CONTACT,
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.target)
    }
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Technology", target: SECTION_TECHNOLOGY },
    NavLink { label: "Features", target: SECTION_FEATURES },
    NavLink { label: "Solutions", target: SECTION_SOLUTIONS },
    NavLink { label: "Contact", target: SECTION_CONTACT },
];

pub const NAV_CTA: NavLink = NavLink { label: "Request Demo", target: SECTION_DEMO };

/// Card or row with a Font Awesome icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const TECHNOLOGY_CARDS: [IconCard; 3] = [
    IconCard {
        icon: "fas fa-wave-square",
        title: "Real-Time Mode-Shape Extraction",
        body: "Advanced algorithms extract critical mode shapes from PMU data streams in real-time, enabling instant system health assessment.",
    },
    IconCard {
        icon: "fas fa-chart-line",
        title: "Multi-Channel Signal Analysis",
        body: "Simultaneously analyze multiple PMU channels to detect correlations and patterns invisible to traditional monitoring systems.",
    },
    IconCard {
        icon: "fas fa-brain",
        title: "Unsupervised AI Insights",
        body: "Machine learning models provide autonomous insights without manual configuration, adapting to your grid's unique characteristics.",
    },
];

pub const FEATURE_ROWS: [IconCard; 4] = [
    IconCard {
        icon: "fas fa-clock",
        title: "Real-Time Monitoring",
        body: "Continuous analysis of PMU data streams with sub-second latency. Monitor grid health 24/7 with instant anomaly detection and alerting capabilities.",
    },
    IconCard {
        icon: "fas fa-triangle-exclamation",
        title: "Oscillation Detection",
        body: "Identify dangerous oscillation patterns before they escalate. Our algorithms detect both forced and natural oscillations across all frequency ranges.",
    },
    IconCard {
        icon: "fas fa-arrow-trend-up",
        title: "Predictive Analytics",
        body: "AI-powered predictions identify potential failures days or weeks in advance. Schedule maintenance proactively and prevent costly outages.",
    },
    IconCard {
        icon: "fas fa-shield-halved",
        title: "Blackout Prevention",
        body: "Advanced algorithms identify cascading failure risks and provide actionable recommendations to prevent system-wide blackouts.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShowcaseCaption {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub alt: &'static str,
}

pub fn showcase_caption(slot: ImageSlot) -> ShowcaseCaption {
    match slot {
        ImageSlot::First => ShowcaseCaption {
            title: "Mode-Shape Extraction",
            subtitle: "Real-time visualization of power system dynamics",
            alt: "Real-time mode-shape extraction visualization showing power grid dynamics",
        },
        ImageSlot::Second => ShowcaseCaption {
            title: "Oscillation Detection",
            subtitle: "Advanced detection with instant alerts",
            alt: "Advanced oscillation detection interface with real-time alerts",
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    pub title: &'static str,
    pub body: &'static str,
}

pub const SOLUTION_POINTS: [Bullet; 3] = [
    Bullet {
        title: "Seamless Integration",
        body: "Compatible with all major PMU vendors and SCADA systems",
    },
    Bullet {
        title: "Enterprise Security",
        body: "Military-grade encryption and compliance with NERC CIP standards",
    },
    Bullet {
        title: "24/7 Support",
        body: "Dedicated technical support team with grid operations expertise",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { value: "99.9%", label: "Uptime Reliability" },
    Stat { value: "<100ms", label: "Detection Latency" },
    Stat { value: "50+", label: "Grid Operators" },
    Stat { value: "24/7", label: "Monitoring Coverage" },
];

pub const DEMO_DURATION: &str = "3:24 Demo";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_targets_are_rendered_sections() {
        for link in NAV_LINKS.iter().chain(std::iter::once(&NAV_CTA)) {
            assert!(SECTION_IDS.contains(&link.target), "{} has no section", link.label);
            assert_eq!(link.href(), format!("#{}", link.target));
        }
    }

    #[test]
    fn each_image_has_its_own_caption() {
        let first = showcase_caption(ImageSlot::First);
        let second = showcase_caption(ImageSlot::Second);
        assert_ne!(first.title, second.title);
        assert_eq!(second.title, "Oscillation Detection");
    }
}
