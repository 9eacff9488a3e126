//! Highlight the navigation link for the current page.

use crate::config::NavConfig;
use siteui_dom::{ClassChange, ClassTarget};

/// File name of the current page: the last path segment, or `index_page`
/// when the path ends in `/`.
pub fn current_page(pathname: &str, index_page: &str) -> String {
    match pathname.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment.to_string(),
        _ => index_page.to_string(),
    }
}

/// Marks links whose `href` names the current page.
#[derive(Debug)]
pub struct ActiveNav {
    current: String,
    config: NavConfig,
}

impl ActiveNav {
    pub fn new(pathname: &str, config: NavConfig) -> Self {
        let current = current_page(pathname, &config.index_page);
        log::debug!("Current page: {}", current);
        Self { current, config }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Exact comparison against the raw `href` attribute.
    pub fn is_active(&self, href: Option<&str>) -> bool {
        href == Some(self.current.as_str())
    }

    pub fn change_for(&self, href: Option<&str>) -> ClassChange {
        if self.is_active(href) {
            ClassChange::new()
                .adding(self.config.active_classes.iter().cloned())
                .removing(self.config.hover_classes.iter().cloned())
        } else {
            ClassChange::new()
                .removing(self.config.active_classes.iter().cloned())
                .adding(self.config.hover_classes.iter().cloned())
                .adding([self.config.transition_class.clone()])
        }
    }

    /// Style one link. Returns whether it is the active one.
    pub fn highlight(&self, link: &impl ClassTarget, href: Option<&str>) -> bool {
        link.apply(&self.change_for(href));
        self.is_active(href)
    }
}
