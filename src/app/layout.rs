use leptos::{html, prelude::*};

use crate::view_state::{LayoutProvider, NavRect, ScrollCommand, Section};

/// Live measurements of the rendered page.
#[derive(Clone, Copy)]
pub struct DomLayout {
    nav_buttons: [NodeRef<html::Button>; Section::ALL.len()],
}

impl DomLayout {
    pub fn new() -> Self {
        Self {
            nav_buttons: std::array::from_fn(|_| NodeRef::new()),
        }
    }

    pub fn nav_button(&self, section: Section) -> NodeRef<html::Button> {
        self.nav_buttons[section.index()]
    }
}

impl LayoutProvider for DomLayout {
    fn section_offset_from_top(&self, section: Section) -> Option<f64> {
        let el = document().get_element_by_id(section.anchor_id())?;
        Some(el.get_bounding_client_rect().top())
    }

    fn nav_button_rect(&self, section: Section) -> Option<NavRect> {
        let button = self.nav_button(section).get_untracked()?;
        // the desktop pill is display:none on small screens
        let width = button.offset_width();
        if width == 0 {
            return None;
        }
        Some(NavRect {
            offset: button.offset_left() as f64,
            width: width as f64,
        })
    }
}

/// Smooth-scroll the viewport to a section. `scroll-padding-top` keeps it clear of the nav bar.
pub fn scroll_to(cmd: ScrollCommand) {
    let Some(el) = document().get_element_by_id(cmd.anchor_id()) else {
        log::warn!("no element with id {}", cmd.anchor_id());
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}
