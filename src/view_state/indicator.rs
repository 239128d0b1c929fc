use super::{LayoutProvider, NavRect, Section};

/// The sliding highlight behind the active nav button.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Indicator {
    pub offset: f64,
    pub width: f64,
}

impl From<NavRect> for Indicator {
    fn from(rect: NavRect) -> Self {
        Self {
            offset: rect.offset,
            width: rect.width,
        }
    }
}

impl Indicator {
    /// Where the indicator should sit for `active`.
    ///
    /// Keeps the current position when the button isn't mounted yet, so the
    /// highlight never snaps to the left edge while the page is still laying out.
    pub fn position_for(self, active: Section, layout: &impl LayoutProvider) -> Indicator {
        layout
            .nav_button_rect(active)
            .map(Indicator::from)
            .unwrap_or(self)
    }
}

#[cfg(test)]
mod tests {
    use super::super::layout::fixture::FixedLayout;
    use super::*;

    #[test]
    fn test_follows_button() {
        let layout = FixedLayout::default()
            .button(Section::About, 5.0, 72.0)
            .button(Section::Skills, 79.0, 68.0);
        let indicator = Indicator::default().position_for(Section::Skills, &layout);
        assert_eq!(
            indicator,
            Indicator {
                offset: 79.0,
                width: 68.0
            }
        );
    }

    #[test]
    fn test_missing_button_keeps_previous() {
        let layout = FixedLayout::default().button(Section::About, 5.0, 72.0);
        let previous = Indicator {
            offset: 151.0,
            width: 84.0,
        };
        assert_eq!(previous.position_for(Section::Contact, &layout), previous);
        assert_ne!(
            previous.position_for(Section::Contact, &layout),
            Indicator::default()
        );
    }
}
