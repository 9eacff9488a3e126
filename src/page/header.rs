//! Header styling once the page scrolls.

use crate::config::HeaderConfig;
use siteui_dom::{ClassChange, ClassTarget};

/// Adds a shadow and translucent backdrop to the header after a small scroll.
#[derive(Debug)]
pub struct HeaderScroll<E> {
    header: E,
    config: HeaderConfig,
}

impl<E: ClassTarget> HeaderScroll<E> {
    pub fn new(header: E, config: HeaderConfig) -> Self {
        Self { header, config }
    }

    /// Strictly past the threshold.
    pub fn is_scrolled(&self, scroll_y: f64) -> bool {
        scroll_y > self.config.threshold
    }

    /// Class change for a scroll offset.
    ///
    /// Scrolling back up removes the scrolled classes but does not restore
    /// the transparent class.
    pub fn change_for(&self, scroll_y: f64) -> ClassChange {
        if self.is_scrolled(scroll_y) {
            ClassChange::new()
                .adding(self.config.scrolled_classes.iter().cloned())
                .removing([self.config.transparent_class.clone()])
        } else {
            ClassChange::new().removing(self.config.scrolled_classes.iter().cloned())
        }
    }

    pub fn on_scroll(&self, scroll_y: f64) {
        self.header.apply(&self.change_for(scroll_y));
    }
}
