use super::Section;

/// Horizontal placement of a rendered nav button, relative to the pill that contains it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavRect {
    pub offset: f64,
    pub width: f64,
}

/// Read-only view of the rendered page.
///
/// Both lookups return `None` while the element in question is not mounted;
/// the reducers treat that as "no information" rather than as a zero value.
pub trait LayoutProvider {
    /// Distance in pixels from the viewport top to the section's top edge.
    fn section_offset_from_top(&self, section: Section) -> Option<f64>;

    fn nav_button_rect(&self, section: Section) -> Option<NavRect>;
}

#[cfg(test)]
pub(crate) mod fixture {
    use std::collections::HashMap;

    use super::*;

    #[derive(Debug, Default)]
    pub struct FixedLayout {
        pub tops: HashMap<Section, f64>,
        pub buttons: HashMap<Section, NavRect>,
    }

    impl FixedLayout {
        pub fn with_tops(tops: &[(Section, f64)]) -> Self {
            Self {
                tops: tops.iter().copied().collect(),
                buttons: HashMap::new(),
            }
        }

        pub fn button(mut self, section: Section, offset: f64, width: f64) -> Self {
            self.buttons.insert(section, NavRect { offset, width });
            self
        }
    }

    impl LayoutProvider for FixedLayout {
        fn section_offset_from_top(&self, section: Section) -> Option<f64> {
            self.tops.get(&section).copied()
        }

        fn nav_button_rect(&self, section: Section) -> Option<NavRect> {
            self.buttons.get(&section).copied()
        }
    }
}
