use super::{LayoutProvider, Section};

/// Scroll-spy parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSpy {
    /// The nav bar switches to its compact style past this vertical offset.
    pub scrolled_threshold: f64,
    /// Line below the viewport top that sections are measured against.
    pub reference_line: f64,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self {
            scrolled_threshold: 50.0,
            reference_line: 90.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollReading {
    pub scrolled: bool,
    /// `None` when no section could be measured.
    pub active: Option<Section>,
}

impl ScrollSpy {
    pub fn is_scrolled(&self, scroll_y: f64) -> bool {
        scroll_y > self.scrolled_threshold
    }

    /// The section whose top edge is nearest the reference line.
    ///
    /// Ties go to the section declared first; unmeasured sections never win.
    pub fn closest_section(&self, layout: &impl LayoutProvider) -> Option<Section> {
        let mut best: Option<(Section, f64)> = None;
        for section in Section::ALL {
            let Some(top) = layout.section_offset_from_top(section) else {
                continue;
            };
            let dist = (top - self.reference_line).abs();
            if dist.is_nan() {
                continue;
            }
            match best {
                Some((_, best_dist)) if best_dist <= dist => {}
                _ => best = Some((section, dist)),
            }
        }
        best.map(|(section, _)| section)
    }

    pub fn read(&self, scroll_y: f64, layout: &impl LayoutProvider) -> ScrollReading {
        ScrollReading {
            scrolled: self.is_scrolled(scroll_y),
            active: self.closest_section(layout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::layout::fixture::FixedLayout;
    use super::*;

    #[test]
    fn test_scrolled_threshold() {
        let spy = ScrollSpy::default();
        for (y, expected) in [
            (0.0, false),
            (49.9, false),
            (50.0, false),
            (50.5, true),
            (1200.0, true),
        ] {
            assert_eq!(spy.is_scrolled(y), expected, "scroll_y = {y}");
        }
    }

    #[test]
    fn test_closest_to_reference_line() {
        let spy = ScrollSpy::default();
        let layout = FixedLayout::with_tops(&[
            (Section::About, -1400.0),
            (Section::Skills, -600.0),
            (Section::Projects, 70.0),
            (Section::Resume, 900.0),
            (Section::Contact, 1700.0),
        ]);
        assert_eq!(spy.closest_section(&layout), Some(Section::Projects));
    }

    #[test]
    fn test_tie_goes_to_first_declared() {
        let spy = ScrollSpy::default();
        let layout = FixedLayout::with_tops(&[
            (Section::Skills, 80.0),
            (Section::Projects, 100.0),
        ]);
        assert_eq!(spy.closest_section(&layout), Some(Section::Skills));

        // declaration order, not measurement order, decides
        let layout = FixedLayout::with_tops(&[
            (Section::Resume, 80.0),
            (Section::About, 100.0),
        ]);
        assert_eq!(spy.closest_section(&layout), Some(Section::About));
    }

    #[test]
    fn test_unmeasured_sections_never_win() {
        let spy = ScrollSpy::default();
        let layout = FixedLayout::with_tops(&[(Section::Contact, 5000.0)]);
        assert_eq!(spy.closest_section(&layout), Some(Section::Contact));

        let layout = FixedLayout::default();
        assert_eq!(spy.closest_section(&layout), None);
    }

    #[test]
    fn test_nan_measurement_ignored() {
        let spy = ScrollSpy::default();
        let layout = FixedLayout::with_tops(&[
            (Section::About, f64::NAN),
            (Section::Skills, 400.0),
        ]);
        assert_eq!(spy.closest_section(&layout), Some(Section::Skills));
    }

    #[test]
    fn test_read() {
        let spy = ScrollSpy::default();
        let layout = FixedLayout::with_tops(&[(Section::About, 90.0), (Section::Skills, 800.0)]);
        assert_eq!(
            spy.read(0.0, &layout),
            ScrollReading {
                scrolled: false,
                active: Some(Section::About),
            }
        );
        assert!(spy.read(300.0, &layout).scrolled);
    }
}
