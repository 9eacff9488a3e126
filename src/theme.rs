//! Dark/light theme preference.
//!
//! The applied theme lives in one place only: the dark class on the root
//! element. [`ThemeController`] resolves it once at load from the stored
//! preference or the host's color scheme, and every toggle control on the
//! page flips it through the same shared controller, persisting each flip.

use crate::config::ThemeConfig;
use serde::{Deserialize, Serialize};
use siteui_dom::{ClassTarget, ColorScheme, ColorSchemeSignal, PreferenceStore};

/// Theme choice - dark or light mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    /// The literal written to storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Parse a stored literal. Only the exact lowercase values are accepted.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    /// The opposite theme.
    pub fn toggled(&self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemePreference::Dark)
    }
}

impl From<ColorScheme> for ThemePreference {
    fn from(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Dark => ThemePreference::Dark,
            ColorScheme::Light => ThemePreference::Light,
        }
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decide the initial theme.
///
/// A stored value always wins over the host scheme. A stored value that is
/// not `dark` (including an unrecognized one) resolves to light.
pub fn resolve_theme(stored: Option<&str>, system: ColorScheme) -> ThemePreference {
    match stored {
        Some(value) => ThemePreference::parse(value).unwrap_or_else(|| {
            log::warn!("Unrecognized stored theme '{}', using light", value);
            ThemePreference::Light
        }),
        None => system.into(),
    }
}

/// Owns the root theme flag and the persisted preference.
///
/// One instance per page. Toggle controls share it behind an `Rc` and call
/// [`ThemeController::toggle_theme`]; none of them hold theme state of their own.
#[derive(Debug)]
pub struct ThemeController<R, S> {
    root: R,
    store: S,
    config: ThemeConfig,
}

impl<R: ClassTarget, S: PreferenceStore> ThemeController<R, S> {
    pub fn new(root: R, store: S, config: ThemeConfig) -> Self {
        Self {
            root,
            store,
            config,
        }
    }

    /// The theme currently applied to the root element.
    pub fn applied_theme(&self) -> ThemePreference {
        if self.root.has_class(&self.config.dark_class) {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }

    /// The persisted preference, if one was ever written.
    ///
    /// Read failures count as absence.
    pub fn stored_preference(&self) -> Option<String> {
        match self.store.get(&self.config.storage_key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Failed to read theme preference: {}", e);
                None
            }
        }
    }

    /// Apply the initial theme from storage or the host scheme.
    ///
    /// Never writes to storage.
    pub fn resolve_initial_theme(&self, signal: &impl ColorSchemeSignal) -> ThemePreference {
        let stored = self.stored_preference();
        let theme = resolve_theme(stored.as_deref(), signal.color_scheme());
        log::debug!(
            "Resolved initial theme: {} (stored: {:?})",
            theme,
            stored.as_deref()
        );
        self.apply(theme);
        theme
    }

    /// Flip the applied theme and persist the new value.
    ///
    /// A failed write is logged; the visual flip happens regardless.
    pub fn toggle_theme(&self) -> ThemePreference {
        let theme = self.applied_theme().toggled();
        self.apply(theme);
        if let Err(e) = self.store.set(&self.config.storage_key, theme.as_str()) {
            log::warn!("Failed to persist theme preference: {}", e);
        }
        log::info!("Theme toggled to {}", theme);
        theme
    }

    fn apply(&self, theme: ThemePreference) {
        self.root.set_class(&self.config.dark_class, theme.is_dark());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use siteui_dom::{FixedScheme, MemoryElement, MemoryStore};
    use std::rc::Rc;

    fn controller(store: MemoryStore) -> ThemeController<MemoryElement, MemoryStore> {
        ThemeController::new(MemoryElement::new(), store, ThemeConfig::default())
    }

    fn stored(c: &ThemeController<MemoryElement, MemoryStore>) -> Option<String> {
        c.store.get("theme").unwrap()
    }

    #[test]
    fn test_stored_dark_wins_over_any_scheme() {
        for signal in [FixedScheme::dark(), FixedScheme::light()] {
            let c = controller(MemoryStore::new().with_entry("theme", "dark"));
            assert_eq!(c.resolve_initial_theme(&signal), ThemePreference::Dark);
            assert!(c.root.has_class("dark"));
        }
    }

    #[test]
    fn test_no_stored_preference_follows_scheme() {
        let c = controller(MemoryStore::new());
        assert_eq!(
            c.resolve_initial_theme(&FixedScheme::dark()),
            ThemePreference::Dark
        );
        assert!(c.root.has_class("dark"));

        let c = controller(MemoryStore::new());
        assert_eq!(
            c.resolve_initial_theme(&FixedScheme::light()),
            ThemePreference::Light
        );
        assert!(!c.root.has_class("dark"));
    }

    #[test]
    fn test_resolution_does_not_write_storage() {
        let c = controller(MemoryStore::new());
        c.resolve_initial_theme(&FixedScheme::dark());
        assert_eq!(c.applied_theme(), ThemePreference::Dark);
        assert!(c.store.is_empty());
    }

    #[test]
    fn test_stored_light_overrides_dark_scheme() {
        let c = controller(MemoryStore::new().with_entry("theme", "light"));
        assert_eq!(
            c.resolve_initial_theme(&FixedScheme::dark()),
            ThemePreference::Light
        );
        assert_eq!(c.applied_theme(), ThemePreference::Light);
    }

    #[test]
    fn test_resolution_clears_preexisting_dark_class() {
        let root = MemoryElement::with_classes("dark scroll-smooth");
        let c = ThemeController::new(
            root.clone(),
            MemoryStore::new().with_entry("theme", "light"),
            ThemeConfig::default(),
        );
        c.resolve_initial_theme(&FixedScheme::dark());
        assert_eq!(root.class_name(), "scroll-smooth");
    }

    #[test]
    fn test_unrecognized_stored_value_is_light() {
        let c = controller(MemoryStore::new().with_entry("theme", "sepia"));
        assert_eq!(
            c.resolve_initial_theme(&FixedScheme::dark()),
            ThemePreference::Light
        );
    }

    #[test]
    fn test_toggle_light_to_dark_persists() {
        let c = controller(MemoryStore::new());
        c.resolve_initial_theme(&FixedScheme::light());

        assert_eq!(c.toggle_theme(), ThemePreference::Dark);
        assert_eq!(c.applied_theme(), ThemePreference::Dark);
        assert_eq!(stored(&c).as_deref(), Some("dark"));
    }

    #[test]
    fn test_toggle_is_involution() {
        let c = controller(MemoryStore::new().with_entry("theme", "dark"));
        c.resolve_initial_theme(&FixedScheme::light());

        c.toggle_theme();
        c.toggle_theme();
        assert_eq!(c.applied_theme(), ThemePreference::Dark);
        assert_eq!(stored(&c).as_deref(), Some("dark"));
    }

    #[test]
    fn test_storage_matches_applied_after_every_toggle() {
        let c = controller(MemoryStore::new());
        c.resolve_initial_theme(&FixedScheme::dark());
        for _ in 0..5 {
            c.toggle_theme();
            assert_eq!(stored(&c).as_deref(), Some(c.applied_theme().as_str()));
        }
    }

    #[test]
    fn test_failed_write_still_flips() {
        let c = controller(MemoryStore::read_only());
        c.resolve_initial_theme(&FixedScheme::light());
        assert_eq!(c.toggle_theme(), ThemePreference::Dark);
        assert!(c.root.has_class("dark"));
        assert_eq!(stored(&c), None);
    }

    #[test]
    fn test_shared_controller_across_controls() {
        let c = Rc::new(controller(MemoryStore::new()));
        c.resolve_initial_theme(&FixedScheme::light());

        let header_toggle = c.clone();
        let mobile_toggle = c.clone();
        header_toggle.toggle_theme();
        assert_eq!(mobile_toggle.applied_theme(), ThemePreference::Dark);
        mobile_toggle.toggle_theme();
        assert_eq!(c.applied_theme(), ThemePreference::Light);
        assert_eq!(stored(&c).as_deref(), Some("light"));
    }

    #[test]
    fn test_custom_config() {
        let config = ThemeConfig {
            storage_key: "site-theme".to_string(),
            dark_class: "theme-dark".to_string(),
            ..ThemeConfig::default()
        };
        let c = ThemeController::new(MemoryElement::new(), MemoryStore::new(), config);
        c.resolve_initial_theme(&FixedScheme::dark());
        assert!(c.root.has_class("theme-dark"));
        c.toggle_theme();
        assert_eq!(c.store.get("site-theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_preference_literals() {
        assert_eq!(ThemePreference::parse("dark"), Some(ThemePreference::Dark));
        assert_eq!(ThemePreference::parse("Dark"), None);
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.to_string(), "dark");
        assert_eq!(
            serde_json::to_string(&ThemePreference::Light).unwrap(),
            r#""light""#
        );
    }
}
