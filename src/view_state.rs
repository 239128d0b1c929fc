//! View-state core of the portfolio page.
//!
//! Everything here is plain Rust with no DOM access, so it runs (and is tested)
//! natively. The components in `app` own a single [`Portfolio`] and feed it
//! scroll, pointer and timer events; it tells them what changed.

mod contact;
mod drawer;
mod indicator;
mod layout;
mod scroll;
mod section;
mod typewriter;

use std::time::Duration;

pub use contact::{ContactError, ContactForm, Field, FormStatus, ACK_DURATION};
pub use drawer::Drawer;
pub use indicator::Indicator;
pub use layout::{LayoutProvider, NavRect};
pub use scroll::{ScrollReading, ScrollSpy};
pub use section::{Section, UnknownSection};
pub use typewriter::{Phase, Typewriter, TypewriterError, TypewriterState, TypewriterTimings};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub active: Section,
    pub scrolled: bool,
    pub menu_open: bool,
    pub indicator: Indicator,
    pub typed_text: String,
}

/// Request for the viewport to bring a section under the fixed nav bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollCommand {
    pub target: Section,
}

impl ScrollCommand {
    pub fn anchor_id(&self) -> &'static str {
        self.target.anchor_id()
    }
}

/// Owner of the page's [`ViewState`].
///
/// Mutating methods return whether the visible state changed, so callers can
/// skip notifying the render layer on no-op events (most scroll events are).
#[derive(Debug, Clone)]
pub struct Portfolio {
    state: ViewState,
    spy: ScrollSpy,
    drawer: Drawer,
    typewriter: Typewriter,
    contact: ContactForm,
}

impl Portfolio {
    pub fn new(phrases: Vec<String>) -> Result<Self, TypewriterError> {
        Self::with_config(phrases, ScrollSpy::default(), TypewriterTimings::default())
    }

    pub fn with_config(
        phrases: Vec<String>,
        spy: ScrollSpy,
        timings: TypewriterTimings,
    ) -> Result<Self, TypewriterError> {
        let typewriter = Typewriter::new(phrases, timings)?;
        let state = ViewState {
            typed_text: typewriter.typed_text(),
            ..ViewState::default()
        };
        Ok(Self {
            state,
            spy,
            drawer: Drawer::default(),
            typewriter,
            contact: ContactForm::default(),
        })
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn typewriter(&self) -> &Typewriter {
        &self.typewriter
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn on_scroll(&mut self, scroll_y: f64, layout: &impl LayoutProvider) -> bool {
        let reading = self.spy.read(scroll_y, layout);
        let active = reading.active.unwrap_or(self.state.active);
        let changed = reading.scrolled != self.state.scrolled || active != self.state.active;
        self.state.scrolled = reading.scrolled;
        self.state.active = active;
        changed
    }

    /// Move the indicator under the active nav button, if that button is laid out.
    pub fn sync_indicator(&mut self, layout: &impl LayoutProvider) -> bool {
        let indicator = self.state.indicator.position_for(self.state.active, layout);
        if indicator == self.state.indicator {
            return false;
        }
        self.state.indicator = indicator;
        true
    }

    /// Advance the typewriter one step; returns the delay before the next step.
    pub fn tick_typewriter(&mut self) -> Duration {
        let delay = self.typewriter.step();
        self.state.typed_text = self.typewriter.typed_text();
        delay
    }

    pub fn typewriter_delay(&self) -> Duration {
        self.typewriter.pending_delay()
    }

    pub fn open_menu(&mut self) -> bool {
        let changed = self.drawer.open();
        self.state.menu_open = self.drawer.is_open();
        changed
    }

    pub fn close_menu(&mut self) -> bool {
        let changed = self.drawer.close();
        self.state.menu_open = self.drawer.is_open();
        changed
    }

    pub fn toggle_menu(&mut self) -> bool {
        let changed = self.drawer.toggle();
        self.state.menu_open = self.drawer.is_open();
        changed
    }

    pub fn pointer_down(&mut self, inside_drawer: bool) -> bool {
        let changed = self.drawer.pointer_down(inside_drawer);
        self.state.menu_open = self.drawer.is_open();
        changed
    }

    /// Navigate to `section`: mark it active, close the drawer, and ask for a scroll.
    pub fn go_to(&mut self, section: Section) -> ScrollCommand {
        log::debug!("navigating to {section}");
        self.state.active = section;
        self.close_menu();
        ScrollCommand { target: section }
    }

    pub fn set_contact_field(&mut self, field: Field, value: String) {
        self.contact.set(field, value);
    }

    pub fn submit_contact(&mut self) -> Result<Duration, ContactError> {
        self.contact.submit()
    }

    pub fn expire_contact_ack(&mut self) -> bool {
        self.contact.expire_ack()
    }
}

#[cfg(test)]
mod tests {
    use super::layout::fixture::FixedLayout;
    use super::*;

    fn portfolio() -> Portfolio {
        Portfolio::new(vec!["Go".to_string(), "Rust".to_string()]).expect("phrases given")
    }

    #[test]
    fn test_defaults() {
        let p = portfolio();
        assert_eq!(p.state(), &ViewState::default());
        assert_eq!(p.state().active, Section::About);
        assert!(!p.state().menu_open);
        assert_eq!(p.state().typed_text, "");
        assert_eq!(p.typewriter_delay(), Duration::from_millis(80));
    }

    #[test]
    fn test_no_phrases() {
        assert_eq!(
            Portfolio::new(Vec::new()).unwrap_err(),
            TypewriterError::NoPhrases
        );
    }

    #[test]
    fn test_scroll_updates_active_and_scrolled() {
        let mut p = portfolio();
        let layout = FixedLayout::with_tops(&[
            (Section::About, -700.0),
            (Section::Skills, 95.0),
            (Section::Projects, 900.0),
        ]);
        assert!(p.on_scroll(780.0, &layout));
        assert!(p.state().scrolled);
        assert_eq!(p.state().active, Section::Skills);

        // same reading again is a no-op
        assert!(!p.on_scroll(781.0, &layout));
    }

    #[test]
    fn test_scroll_without_measurements_keeps_active() {
        let mut p = portfolio();
        p.go_to(Section::Resume);
        assert!(!p.on_scroll(10.0, &FixedLayout::default()));
        assert_eq!(p.state().active, Section::Resume);
        assert!(!p.state().scrolled);
    }

    #[test]
    fn test_indicator_follows_active() {
        let mut p = portfolio();
        let layout = FixedLayout::with_tops(&[(Section::About, 500.0), (Section::Skills, 85.0)])
            .button(Section::About, 5.0, 70.0)
            .button(Section::Skills, 77.0, 66.0);
        assert!(p.sync_indicator(&layout));
        assert_eq!(p.state().indicator, Indicator { offset: 5.0, width: 70.0 });

        p.on_scroll(600.0, &layout);
        assert!(p.sync_indicator(&layout));
        assert_eq!(p.state().indicator, Indicator { offset: 77.0, width: 66.0 });
        assert!(!p.sync_indicator(&layout));
    }

    #[test]
    fn test_indicator_retained_when_button_missing() {
        let mut p = portfolio();
        let layout = FixedLayout::default().button(Section::About, 5.0, 70.0);
        p.sync_indicator(&layout);
        p.go_to(Section::Projects);
        assert!(!p.sync_indicator(&layout));
        assert_eq!(p.state().indicator, Indicator { offset: 5.0, width: 70.0 });
    }

    #[test]
    fn test_go_to_closes_menu() {
        let mut p = portfolio();
        assert!(p.open_menu());
        assert!(p.state().menu_open);

        let section: Section = "Contact".parse().expect("known section");
        let cmd = p.go_to(section);
        assert!(!p.state().menu_open);
        assert_eq!(p.state().active, Section::Contact);
        assert_eq!(cmd.anchor_id(), "contact");
    }

    #[test]
    fn test_menu_transitions() {
        let mut p = portfolio();
        assert!(!p.close_menu());
        assert!(!p.state().menu_open);
        assert!(p.toggle_menu());
        assert!(p.state().menu_open);
        assert!(!p.pointer_down(true));
        assert!(p.state().menu_open);
        assert!(p.pointer_down(false));
        assert!(!p.state().menu_open);
    }

    #[test]
    fn test_typed_text_tracks_typewriter() {
        let mut p = portfolio();
        p.tick_typewriter();
        assert_eq!(p.state().typed_text, "G");
        assert_eq!(p.tick_typewriter(), Duration::from_millis(1800));
        assert_eq!(p.state().typed_text, "Go");
        for _ in 0..3 {
            p.tick_typewriter();
        }
        assert_eq!(p.typewriter().state().phrase_index(), 1);
        assert_eq!(p.state().typed_text, "");
        p.tick_typewriter();
        assert_eq!(p.state().typed_text, "R");
    }

    #[test]
    fn test_contact_flow() {
        let mut p = portfolio();
        p.set_contact_field(Field::Name, "Ada".to_string());
        assert_eq!(
            p.submit_contact(),
            Err(ContactError::MissingField(Field::Email))
        );
        assert_eq!(p.contact().name, "Ada");

        p.set_contact_field(Field::Email, "ada@example.com".to_string());
        p.set_contact_field(Field::Message, "Hi".to_string());
        assert_eq!(p.submit_contact(), Ok(ACK_DURATION));
        assert_eq!(p.contact().status(), FormStatus::Sent);
        assert!(p.expire_contact_ack());
        assert_eq!(p.contact().status(), FormStatus::Idle);
    }
}
