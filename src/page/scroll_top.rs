//! Floating scroll-to-top button.

use crate::config::ScrollTopConfig;
use siteui_dom::{ClassChange, ClassTarget, Viewport};

/// Initial class attribute for a freshly created button: the configured
/// classes without the desktop-only ones, plus the display class so the
/// button also shows on small screens.
pub fn button_class_name(config: &ScrollTopConfig) -> String {
    let mut classes: Vec<&str> = config
        .button_classes
        .split_whitespace()
        .filter(|c| !config.desktop_only_classes.iter().any(|d| d == c))
        .collect();
    if !classes.contains(&config.display_class.as_str()) {
        classes.push(&config.display_class);
    }
    classes.join(" ")
}

/// Button that fades in after scrolling down and scrolls back up on click.
#[derive(Debug)]
pub struct ScrollToTop<E, V> {
    button: E,
    viewport: V,
    config: ScrollTopConfig,
}

impl<E: ClassTarget, V: Viewport> ScrollToTop<E, V> {
    pub fn new(button: E, viewport: V, config: ScrollTopConfig) -> Self {
        Self {
            button,
            viewport,
            config,
        }
    }

    pub fn is_visible_at(&self, scroll_y: f64) -> bool {
        scroll_y > self.config.threshold
    }

    pub fn change_for(&self, scroll_y: f64) -> ClassChange {
        let show = ClassChange::new()
            .adding(self.config.visible_classes.iter().cloned())
            .removing(self.config.hidden_classes.iter().cloned());
        if self.is_visible_at(scroll_y) {
            show
        } else {
            show.inverse()
        }
    }

    pub fn on_scroll(&self, scroll_y: f64) {
        self.button.apply(&self.change_for(scroll_y));
    }

    pub fn on_click(&self) {
        log::debug!("Scrolling to top from {}", self.viewport.scroll_y());
        self.viewport.scroll_to_top();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use siteui_dom::{MemoryElement, MemoryViewport};
    use std::rc::Rc;

    type Button = ScrollToTop<MemoryElement, Rc<MemoryViewport>>;

    fn button() -> (MemoryElement, Rc<MemoryViewport>, Button) {
        let config = ScrollTopConfig::default();
        let el = MemoryElement::with_classes(&button_class_name(&config));
        let viewport = Rc::new(MemoryViewport::new());
        let widget = ScrollToTop::new(el.clone(), viewport.clone(), config);
        (el, viewport, widget)
    }

    #[test]
    fn test_class_name_drops_desktop_only() {
        let name = button_class_name(&ScrollTopConfig::default());
        let classes: Vec<&str> = name.split_whitespace().collect();
        assert!(!classes.contains(&"hidden"));
        assert!(!classes.contains(&"lg:flex"));
        assert_eq!(classes.first(), Some(&"fixed"));
        assert_eq!(classes.last(), Some(&"flex"));
        assert!(classes.contains(&"translate-y-20"));
    }

    #[test]
    fn test_visibility_threshold_is_strict() {
        let (el, _, widget) = button();
        widget.on_scroll(400.0);
        assert!(el.has_class("opacity-0"));
        assert!(!el.has_class("opacity-100"));

        widget.on_scroll(401.0);
        assert!(el.has_class("translate-y-0"));
        assert!(el.has_class("opacity-100"));
        assert!(!el.has_class("translate-y-20"));

        widget.on_scroll(0.0);
        assert!(el.has_class("translate-y-20"));
        assert!(!el.has_class("translate-y-0"));
    }

    #[test]
    fn test_click_scrolls_to_top() {
        let (_, viewport, widget) = button();
        viewport.set_scroll_y(1200.0);
        widget.on_click();
        assert_eq!(viewport.scroll_to_top_calls(), 1);
        assert_eq!(viewport.scroll_y(), 0.0);
    }
}
