//! Slide-in mobile navigation menu.

use crate::config::MenuConfig;
use siteui_dom::ClassTarget;

/// The off-canvas menu panel.
///
/// Closed means the hidden class is present; the stylesheet slides the panel
/// out of view.
#[derive(Debug)]
pub struct MobileMenu<E> {
    panel: E,
    hidden_class: String,
}

impl<E: ClassTarget> MobileMenu<E> {
    pub fn new(panel: E, config: &MenuConfig) -> Self {
        Self {
            panel,
            hidden_class: config.hidden_class.clone(),
        }
    }

    pub fn open(&self) {
        self.panel.remove_class(&self.hidden_class);
    }

    pub fn close(&self) {
        self.panel.add_class(&self.hidden_class);
    }

    pub fn is_open(&self) -> bool {
        !self.panel.has_class(&self.hidden_class)
    }

    /// Click anywhere on the panel. Only a click on the backdrop itself, not
    /// on a link or child inside it, closes the menu.
    pub fn on_panel_click(&self, target_is_panel: bool) {
        if target_is_panel {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use siteui_dom::MemoryElement;

    fn menu() -> (MemoryElement, MobileMenu<MemoryElement>) {
        let panel = MemoryElement::with_classes("fixed inset-0 translate-x-full");
        let menu = MobileMenu::new(panel.clone(), &MenuConfig::default());
        (panel, menu)
    }

    #[test]
    fn test_open_and_close() {
        let (panel, menu) = menu();
        assert!(!menu.is_open());

        menu.open();
        assert!(menu.is_open());
        assert_eq!(panel.class_name(), "fixed inset-0");

        menu.close();
        assert!(panel.has_class("translate-x-full"));
    }

    #[test]
    fn test_backdrop_click_closes_only_on_self() {
        let (_, menu) = menu();
        menu.open();

        menu.on_panel_click(false);
        assert!(menu.is_open());

        menu.on_panel_click(true);
        assert!(!menu.is_open());
    }
}
