/// Open/closed state of the mobile navigation drawer.
///
/// Every operation is idempotent and reports whether it changed anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Drawer {
    open: bool,
}

impl Drawer {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) -> bool {
        self.set(true)
    }

    pub fn close(&mut self) -> bool {
        self.set(false)
    }

    pub fn toggle(&mut self) -> bool {
        self.set(!self.open)
    }

    /// Whether pointer-down events outside the drawer should be observed at all.
    pub fn wants_outside_clicks(&self) -> bool {
        self.open
    }

    /// A pointer went down somewhere on the page.
    pub fn pointer_down(&mut self, inside_drawer: bool) -> bool {
        if self.open && !inside_drawer {
            self.close()
        } else {
            false
        }
    }

    fn set(&mut self, open: bool) -> bool {
        if self.open == open {
            return false;
        }
        self.open = open;
        log::debug!("drawer {}", if open { "opened" } else { "closed" });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close_idempotent() {
        let mut drawer = Drawer::default();
        assert!(!drawer.close());
        assert!(!drawer.is_open());

        assert!(drawer.open());
        assert!(!drawer.open());
        assert!(drawer.is_open());

        assert!(drawer.close());
        assert!(!drawer.close());
        assert!(!drawer.is_open());
    }

    #[test]
    fn test_toggle() {
        let mut drawer = Drawer::default();
        drawer.toggle();
        assert!(drawer.is_open());
        drawer.toggle();
        assert!(!drawer.is_open());
    }

    #[test]
    fn test_outside_click() {
        let mut drawer = Drawer::default();
        assert!(!drawer.wants_outside_clicks());
        assert!(!drawer.pointer_down(false));

        drawer.open();
        assert!(drawer.wants_outside_clicks());
        assert!(!drawer.pointer_down(true));
        assert!(drawer.is_open());
        assert!(drawer.pointer_down(false));
        assert!(!drawer.is_open());
        assert!(!drawer.wants_outside_clicks());
    }
}
