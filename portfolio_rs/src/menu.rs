//! Open/closed state of the small-viewport navigation menu.

/// Mobile navigation menu toggle. Closed by default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    /// A closed menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip open/closed (menu button).
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A navigation link was activated; the menu always closes.
    pub fn link_activated(&mut self) {
        self.open = false;
    }

    /// Whether the menu is showing.
    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles() {
        let mut menu = MobileMenu::new();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn link_closes_open_menu() {
        let mut menu = MobileMenu::new();
        menu.toggle();
        menu.link_activated();
        assert!(!menu.is_open());

        // closed stays closed
        menu.link_activated();
        assert!(!menu.is_open());
    }
}
