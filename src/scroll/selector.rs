use crate::config::ScrollTuning;

/// Which of the two showcase images is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageSlot {
    #[default]
    First,
    Second,
}

impl ImageSlot {
    pub const ALL: [ImageSlot; 2] = [ImageSlot::First, ImageSlot::Second];

    pub fn index(self) -> usize {
        match self {
            ImageSlot::First => 0,
            ImageSlot::Second => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Features and images side by side.
    Desktop,
    /// Features stacked above the images.
    Narrow,
}

impl Layout {
    pub fn for_width(width: f64, tuning: &ScrollTuning) -> Self {
        if width >= tuning.breakpoint {
            Layout::Desktop
        } else {
            Layout::Narrow
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
}

/// Top edge and height of an element, relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBox {
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    pub viewport: Viewport,
    pub section: ElementBox,
    /// Image container inside the section; only consulted on narrow layouts.
    pub container: Option<ElementBox>,
}

/// Progress through a span, clamped to 0..=1. Non-positive spans saturate.
fn progress(travelled: f64, span: f64) -> f64 {
    if span <= 0.0 || !span.is_finite() {
        return if travelled > 0.0 { 1.0 } else { 0.0 };
    }
    (travelled / span).clamp(0.0, 1.0)
}

fn select_desktop(section: ElementBox, viewport_height: f64, tuning: &ScrollTuning) -> ImageSlot {
    let activation = viewport_height * tuning.desktop_activation;
    let scrolled_past = -section.height * tuning.desktop_scrolled_past;

    if section.top >= activation {
        ImageSlot::First
    } else if section.top <= scrolled_past {
        ImageSlot::Second
    } else {
        let p = progress(activation - section.top, section.height * tuning.desktop_span);
        if p > tuning.desktop_switch {
            ImageSlot::Second
        } else {
            ImageSlot::First
        }
    }
}

fn select_narrow(container: ElementBox, viewport_height: f64, tuning: &ScrollTuning) -> ImageSlot {
    let activation = viewport_height * tuning.narrow_activation;
    if container.top >= activation {
        return ImageSlot::First;
    }
    let span = container.height + viewport_height * tuning.narrow_padding;
    if progress(activation - container.top, span) > tuning.narrow_switch {
        ImageSlot::Second
    } else {
        ImageSlot::First
    }
}

/// Picks the image for a scroll sample.
///
/// Returns `None` when the narrow layout is active but the image container
/// was not measured; callers keep their current selection in that case.
pub fn select_image(sample: &ScrollSample, tuning: &ScrollTuning) -> Option<ImageSlot> {
    match Layout::for_width(sample.viewport.width, tuning) {
        Layout::Desktop => Some(select_desktop(sample.section, sample.viewport.height, tuning)),
        Layout::Narrow => sample
            .container
            .map(|container| select_narrow(container, sample.viewport.height, tuning)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 1000.0;

    fn desktop(section_top: f64, section_height: f64) -> ScrollSample {
        ScrollSample {
            viewport: Viewport { scroll_y: 0.0, width: 1440.0, height: VH },
            section: ElementBox { top: section_top, height: section_height },
            container: Some(ElementBox { top: section_top + 400.0, height: 500.0 }),
        }
    }

    fn narrow(container_top: f64, container_height: f64) -> ScrollSample {
        ScrollSample {
            viewport: Viewport { scroll_y: 0.0, width: 390.0, height: VH },
            section: ElementBox { top: container_top - 1200.0, height: 2000.0 },
            container: Some(ElementBox { top: container_top, height: container_height }),
        }
    }

    fn pick(sample: ScrollSample) -> Option<ImageSlot> {
        select_image(&sample, &ScrollTuning::default())
    }

    #[test]
    fn desktop_before_activation_zone_shows_first() {
        for top in [300.0, 301.0, 800.0, 5000.0] {
            assert_eq!(pick(desktop(top, 1000.0)), Some(ImageSlot::First), "top = {top}");
        }
    }

    #[test]
    fn desktop_scrolled_mostly_past_shows_second() {
        for top in [-500.0, -501.0, -2000.0] {
            assert_eq!(pick(desktop(top, 1000.0)), Some(ImageSlot::Second), "top = {top}");
        }
    }

    #[test]
    fn desktop_switches_strictly_above_thirty_percent() {
        // span = 1000 * 0.8 = 800, so progress 0.3 is 240px past the 300px activation line.
        assert_eq!(pick(desktop(60.0, 1000.0)), Some(ImageSlot::First));
        assert_eq!(pick(desktop(59.0, 1000.0)), Some(ImageSlot::Second));
        assert_eq!(pick(desktop(299.0, 1000.0)), Some(ImageSlot::First));
    }

    #[test]
    fn narrow_waits_for_container_to_enter_view() {
        assert_eq!(pick(narrow(800.0, 600.0)), Some(ImageSlot::First));
        assert_eq!(pick(narrow(3000.0, 600.0)), Some(ImageSlot::First));
    }

    #[test]
    fn narrow_switches_strictly_above_seventy_percent() {
        // span = 600 + 400 = 1000, progress 0.7 is 700px past the 800px activation line.
        assert_eq!(pick(narrow(100.0, 600.0)), Some(ImageSlot::First));
        assert_eq!(pick(narrow(99.0, 600.0)), Some(ImageSlot::Second));
        assert_eq!(pick(narrow(-4000.0, 600.0)), Some(ImageSlot::Second));
    }

    #[test]
    fn narrow_without_container_makes_no_decision() {
        let mut sample = narrow(0.0, 600.0);
        sample.container = None;
        assert_eq!(pick(sample), None);
    }

    #[test]
    fn desktop_ignores_missing_container() {
        let mut sample = desktop(-600.0, 1000.0);
        sample.container = None;
        assert_eq!(pick(sample), Some(ImageSlot::Second));
    }

    #[test]
    fn resize_across_breakpoint_reevaluates_with_new_policy() {
        // Section deep in the desktop activation zone, container not yet in narrow view.
        let mut sample = desktop(-300.0, 1000.0);
        sample.container = Some(ElementBox { top: 900.0, height: 600.0 });
        assert_eq!(pick(sample), Some(ImageSlot::Second));

        sample.viewport.width = 1023.0;
        assert_eq!(pick(sample), Some(ImageSlot::First));

        sample.viewport.width = 1024.0;
        assert_eq!(pick(sample), Some(ImageSlot::Second));
    }

    #[test]
    fn zero_height_section_does_not_produce_nan() {
        assert_eq!(pick(desktop(0.0, 0.0)), Some(ImageSlot::Second));
        assert_eq!(progress(0.0, 0.0), 0.0);
        assert_eq!(progress(10.0, -5.0), 1.0);
    }

    #[test]
    fn slot_indices() {
        assert_eq!(ImageSlot::default(), ImageSlot::First);
        assert_eq!(ImageSlot::ALL.map(ImageSlot::index), [0, 1]);
    }
}
