/// Viewports at least this wide use the side-by-side desktop layout.
pub const DESKTOP_BREAKPOINT_PX: f64 = 1024.0;

/// Desktop: the section starts being tracked once its top is within this
/// fraction of the viewport height.
pub const DESKTOP_ACTIVATION_RATIO: f64 = 0.3;
/// Desktop: share of the section height that maps onto progress 0..1.
pub const DESKTOP_PROGRESS_SPAN: f64 = 0.8;
/// Desktop: progress above which the second image is shown.
pub const DESKTOP_SWITCH_PROGRESS: f64 = 0.3;
/// Desktop: once the section top is above `-height * ratio` it counts as scrolled past.
pub const DESKTOP_SCROLLED_PAST_RATIO: f64 = 0.5;

/// Narrow: tracking starts once the image container top is within this
/// fraction of the viewport height.
pub const NARROW_ACTIVATION_RATIO: f64 = 0.8;
/// Narrow: extra travel, as a fraction of viewport height, added to the container height.
pub const NARROW_TRAVEL_PADDING: f64 = 0.4;
/// Narrow: progress above which the second image is shown.
pub const NARROW_SWITCH_PROGRESS: f64 = 0.7;

/// Thresholds used by the scroll-driven image selector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTuning {
    pub breakpoint: f64,
    pub desktop_activation: f64,
    pub desktop_span: f64,
    pub desktop_switch: f64,
    pub desktop_scrolled_past: f64,
    pub narrow_activation: f64,
    pub narrow_padding: f64,
    pub narrow_switch: f64,
}

impl Default for ScrollTuning {
    fn default() -> Self {
        Self {
            breakpoint: DESKTOP_BREAKPOINT_PX,
            desktop_activation: DESKTOP_ACTIVATION_RATIO,
            desktop_span: DESKTOP_PROGRESS_SPAN,
            desktop_switch: DESKTOP_SWITCH_PROGRESS,
            desktop_scrolled_past: DESKTOP_SCROLLED_PAST_RATIO,
            narrow_activation: NARROW_ACTIVATION_RATIO,
            narrow_padding: NARROW_TRAVEL_PADDING,
            narrow_switch: NARROW_SWITCH_PROGRESS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MediaPaths {
    pub hero: String,
    pub solutions: String,
    pub mode_shape: String,
    pub oscillation: String,
}

/// Everything that differs between deployments of the landing page.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub brand: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub media: MediaPaths,
    pub scroll: ScrollTuning,
}

impl SiteConfig {
    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }

    pub fn tel_href(&self) -> String {
        let dialable: String = self
            .contact_phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{}", dialable)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "MatAstra".to_string(),
            contact_email: "info@matastra.com".to_string(),
            contact_phone: "(608) 588-6418".to_string(),
            media: MediaPaths {
                hero: "/assets/power-lines.jpg".to_string(),
                solutions: "/assets/workers.jpeg".to_string(),
                mode_shape: "/assets/mode-shape.webp".to_string(),
                oscillation: "/assets/oscillation.webp".to_string(),
            },
            scroll: ScrollTuning::default(),
        }
    }
}

// Overrides are baked in at build time, e.g. `MATASTRA_BRAND=Acme trunk build`.
pub fn site_config() -> SiteConfig {
    let mut config = SiteConfig::default();
    if let Some(brand) = option_env!("MATASTRA_BRAND") {
        config.brand = brand.to_string();
    }
    if let Some(email) = option_env!("MATASTRA_CONTACT_EMAIL") {
        config.contact_email = email.to_string();
    }
    if let Some(phone) = option_env!("MATASTRA_CONTACT_PHONE") {
        config.contact_phone = phone.to_string();
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tel_href_keeps_only_dialable_characters() {
        let config = SiteConfig::default();
        assert_eq!(config.tel_href(), "tel:6085886418");

        let config = SiteConfig {
            contact_phone: "+1 (608) 588-6418".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(config.tel_href(), "tel:+16085886418");
    }

    #[test]
    fn mailto_href_wraps_email() {
        assert_eq!(SiteConfig::default().mailto_href(), "mailto:info@matastra.com");
    }

    #[test]
    fn default_tuning_uses_named_constants() {
        let tuning = ScrollTuning::default();
        assert_eq!(tuning.breakpoint, 1024.0);
        assert_eq!(tuning.desktop_switch, 0.3);
        assert_eq!(tuning.narrow_switch, 0.7);
        assert_eq!(tuning.narrow_activation, 0.8);
    }
}
