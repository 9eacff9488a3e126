//! Dashboard sidebar on small screens.
//!
//! The toggle button floats the sidebar over the page and fades in a dimming
//! overlay; clicking the overlay puts both away. The overlay's opacity
//! change is deferred so the CSS transition runs after `hidden` is lifted,
//! and its `hidden` class returns only after the fade-out finishes.

use crate::config::SidebarConfig;
use siteui_dom::{ClassChange, ClassTarget, Scheduler};

/// Sidebar plus overlay pair.
#[derive(Debug)]
pub struct DashboardSidebar<E, S> {
    sidebar: E,
    overlay: E,
    scheduler: S,
    config: SidebarConfig,
}

impl<E, S> DashboardSidebar<E, S>
where
    E: ClassTarget + Clone + 'static,
    S: Scheduler,
{
    pub fn new(sidebar: E, overlay: E, scheduler: S, config: SidebarConfig) -> Self {
        Self {
            sidebar,
            overlay,
            scheduler,
            config,
        }
    }

    /// Toggle button clicked.
    ///
    /// Flips the sidebar's display and always shows the overlay, matching the
    /// stock page: a second click hides the sidebar but leaves the overlay up
    /// until it is clicked.
    pub fn on_toggle_click(&self) {
        self.sidebar.toggle_class(&self.config.hidden_class);
        self.sidebar.toggle_class(&self.config.display_class);
        self.sidebar
            .apply(&ClassChange::new().adding(self.config.open_classes.iter().cloned()));
        self.overlay.remove_class(&self.config.hidden_class);
        self.defer_overlay_class(self.config.fade_in_delay(), true);
    }

    /// Overlay clicked: hide the sidebar and fade the overlay out.
    pub fn on_overlay_click(&self) {
        self.sidebar.apply(
            &ClassChange::new()
                .adding([self.config.hidden_class.clone()])
                .removing([self.config.display_class.clone()])
                .removing(self.config.open_classes.iter().cloned()),
        );
        self.overlay.remove_class(&self.config.overlay_visible_class);
        self.defer_overlay_class(self.config.fade_out_delay(), false);
    }

    fn defer_overlay_class(&self, delay: std::time::Duration, fading_in: bool) {
        let overlay = self.overlay.clone();
        let class = if fading_in {
            self.config.overlay_visible_class.clone()
        } else {
            self.config.hidden_class.clone()
        };
        self.scheduler
            .schedule(delay, Box::new(move || overlay.add_class(&class)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use siteui_dom::{ManualScheduler, MemoryElement};
    use std::rc::Rc;
    use std::time::Duration;

    struct Fixture {
        sidebar: MemoryElement,
        overlay: MemoryElement,
        scheduler: Rc<ManualScheduler>,
        widget: DashboardSidebar<MemoryElement, Rc<ManualScheduler>>,
    }

    fn fixture() -> Fixture {
        let config = SidebarConfig::default();
        let sidebar = MemoryElement::with_classes("hidden md:flex flex-col");
        let overlay = MemoryElement::with_classes(&config.overlay_classes);
        let scheduler = Rc::new(ManualScheduler::new());
        let widget =
            DashboardSidebar::new(sidebar.clone(), overlay.clone(), scheduler.clone(), config);
        Fixture {
            sidebar,
            overlay,
            scheduler,
            widget,
        }
    }

    #[test]
    fn test_open_shows_sidebar_and_fades_in_overlay() {
        let f = fixture();
        f.widget.on_toggle_click();

        assert_eq!(
            f.sidebar.class_name(),
            "md:flex flex-col flex fixed inset-y-0 left-0 w-64"
        );
        assert!(!f.overlay.has_class("hidden"));
        assert!(!f.overlay.has_class("opacity-100"));

        f.scheduler.advance(Duration::from_millis(9));
        assert!(!f.overlay.has_class("opacity-100"));
        f.scheduler.advance(Duration::from_millis(1));
        assert!(f.overlay.has_class("opacity-100"));
    }

    #[test]
    fn test_overlay_click_hides_everything_after_fade() {
        let f = fixture();
        f.widget.on_toggle_click();
        f.scheduler.advance(Duration::from_millis(10));

        f.widget.on_overlay_click();
        assert_eq!(f.sidebar.class_name(), "md:flex flex-col hidden");
        assert!(!f.overlay.has_class("opacity-100"));
        assert!(!f.overlay.has_class("hidden"));

        f.scheduler.advance(Duration::from_millis(299));
        assert!(!f.overlay.has_class("hidden"));
        f.scheduler.advance(Duration::from_millis(1));
        assert!(f.overlay.has_class("hidden"));
        assert_eq!(f.scheduler.pending(), 0);
    }

    #[test]
    fn test_second_toggle_hides_sidebar_keeps_overlay() {
        let f = fixture();
        f.widget.on_toggle_click();
        f.widget.on_toggle_click();
        f.scheduler.advance(Duration::from_millis(10));

        assert!(f.sidebar.has_class("hidden"));
        assert!(!f.sidebar.has_class("flex"));
        assert!(f.sidebar.has_class("fixed"));
        assert!(f.overlay.has_class("opacity-100"));
    }
}
