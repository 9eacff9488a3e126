//! Configuration for the page behaviors.
//!
//! Every selector, class name and threshold the components use comes from
//! [`SiteConfig`]. Defaults reproduce the stock site; a page can override any
//! subset by embedding JSON in a `<script type="application/json"
//! id="siteui-config">` element.

use crate::constants;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Log level setting for the page script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Logging disabled
    Off,
    /// Show only errors
    Error,
    /// Show errors and warnings
    #[default]
    Warn,
    /// Show errors, warnings, and info messages
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

fn to_strings(classes: &[&str]) -> Vec<String> {
    classes.iter().map(|c| c.to_string()).collect()
}

/// Top-level page configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Version of the configuration format
    pub version: u32,
    /// Console log verbosity
    pub log_level: LogLevel,
    pub theme: ThemeConfig,
    pub menu: MenuConfig,
    pub header: HeaderConfig,
    pub nav: NavConfig,
    pub scroll_top: ScrollTopConfig,
    pub sidebar: SidebarConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            log_level: LogLevel::default(),
            theme: ThemeConfig::default(),
            menu: MenuConfig::default(),
            header: HeaderConfig::default(),
            nav: NavConfig::default(),
            scroll_top: ScrollTopConfig::default(),
            sidebar: SidebarConfig::default(),
        }
    }
}

/// Theme toggle section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Storage key for the persisted preference
    pub storage_key: String,
    /// Class toggled on the root element
    pub dark_class: String,
    /// Selector matching every toggle control
    pub toggle_selector: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: constants::theme::STORAGE_KEY.to_string(),
            dark_class: constants::theme::DARK_CLASS.to_string(),
            toggle_selector: constants::theme::TOGGLE_SELECTOR.to_string(),
        }
    }
}

/// Mobile menu section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub open_button_id: String,
    pub panel_id: String,
    pub close_button_id: String,
    pub hidden_class: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            open_button_id: constants::menu::OPEN_BUTTON_ID.to_string(),
            panel_id: constants::menu::PANEL_ID.to_string(),
            close_button_id: constants::menu::CLOSE_BUTTON_ID.to_string(),
            hidden_class: constants::menu::HIDDEN_CLASS.to_string(),
        }
    }
}

/// Header scroll section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub selector: String,
    /// Scroll offset (px) that must be exceeded
    pub threshold: f64,
    pub scrolled_classes: Vec<String>,
    pub transparent_class: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            selector: constants::header::SELECTOR.to_string(),
            threshold: constants::header::SCROLL_THRESHOLD,
            scrolled_classes: to_strings(constants::header::SCROLLED_CLASSES),
            transparent_class: constants::header::TRANSPARENT_CLASS.to_string(),
        }
    }
}

/// Active navigation section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub link_selector: String,
    pub index_page: String,
    pub active_classes: Vec<String>,
    pub hover_classes: Vec<String>,
    pub transition_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            link_selector: constants::nav::LINK_SELECTOR.to_string(),
            index_page: constants::nav::INDEX_PAGE.to_string(),
            active_classes: to_strings(constants::nav::ACTIVE_CLASSES),
            hover_classes: to_strings(constants::nav::HOVER_CLASSES),
            transition_class: constants::nav::TRANSITION_CLASS.to_string(),
        }
    }
}

/// Scroll-to-top button section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollTopConfig {
    pub button_id: String,
    pub icon_html: String,
    /// Scroll offset (px) that must be exceeded
    pub threshold: f64,
    pub button_classes: String,
    pub desktop_only_classes: Vec<String>,
    pub display_class: String,
    pub hidden_classes: Vec<String>,
    pub visible_classes: Vec<String>,
}

impl Default for ScrollTopConfig {
    fn default() -> Self {
        Self {
            button_id: constants::scroll_top::BUTTON_ID.to_string(),
            icon_html: constants::scroll_top::ICON_HTML.to_string(),
            threshold: constants::scroll_top::SCROLL_THRESHOLD,
            button_classes: constants::scroll_top::BUTTON_CLASSES.to_string(),
            desktop_only_classes: to_strings(constants::scroll_top::DESKTOP_ONLY_CLASSES),
            display_class: constants::scroll_top::DISPLAY_CLASS.to_string(),
            hidden_classes: to_strings(constants::scroll_top::HIDDEN_CLASSES),
            visible_classes: to_strings(constants::scroll_top::VISIBLE_CLASSES),
        }
    }
}

/// Dashboard sidebar section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    pub toggle_icon_selector: String,
    pub sidebar_selector: String,
    pub overlay_selector: String,
    pub overlay_classes: String,
    pub open_classes: Vec<String>,
    pub hidden_class: String,
    pub display_class: String,
    pub overlay_visible_class: String,
    pub fade_in_delay_ms: u64,
    pub fade_out_delay_ms: u64,
}

impl SidebarConfig {
    pub fn fade_in_delay(&self) -> Duration {
        Duration::from_millis(self.fade_in_delay_ms)
    }

    pub fn fade_out_delay(&self) -> Duration {
        Duration::from_millis(self.fade_out_delay_ms)
    }
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            toggle_icon_selector: constants::sidebar::TOGGLE_ICON_SELECTOR.to_string(),
            sidebar_selector: constants::sidebar::SIDEBAR_SELECTOR.to_string(),
            overlay_selector: constants::sidebar::OVERLAY_SELECTOR.to_string(),
            overlay_classes: constants::sidebar::OVERLAY_CLASSES.to_string(),
            open_classes: to_strings(constants::sidebar::OPEN_CLASSES),
            hidden_class: constants::sidebar::HIDDEN_CLASS.to_string(),
            display_class: constants::sidebar::DISPLAY_CLASS.to_string(),
            overlay_visible_class: constants::sidebar::OVERLAY_VISIBLE_CLASS.to_string(),
            fade_in_delay_ms: constants::sidebar::FADE_IN_DELAY_MS,
            fade_out_delay_ms: constants::sidebar::FADE_OUT_DELAY_MS,
        }
    }
}

impl SiteConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Read the config embedded in the page, if any.
    ///
    /// `Ok(None)` when the page has no config element.
    #[cfg(target_arch = "wasm32")]
    pub fn load_from_document(document: &web_sys::Document) -> Result<Option<Self>, ConfigError> {
        let Some(element) = document.get_element_by_id(constants::CONFIG_ELEMENT_ID) else {
            return Ok(None);
        };
        let json = element.text_content().unwrap_or_default();
        if json.trim().is_empty() {
            return Ok(None);
        }
        Self::from_json(&json).map(Some)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_site() {
        let config = SiteConfig::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.theme.storage_key, "theme");
        assert_eq!(config.theme.dark_class, "dark");
        assert_eq!(config.header.threshold, 10.0);
        assert_eq!(config.scroll_top.threshold, 400.0);
        assert_eq!(config.sidebar.fade_in_delay(), Duration::from_millis(10));
        assert_eq!(config.sidebar.fade_out_delay(), Duration::from_millis(300));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "log_level": "debug", "theme": { "storage_key": "site-theme" } }"#;
        let config = SiteConfig::from_json(json).unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.theme.storage_key, "site-theme");
        assert_eq!(config.theme.dark_class, "dark");
        assert_eq!(config.menu, MenuConfig::default());
        assert_eq!(config.version, CONFIG_VERSION);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = SiteConfig::new();
        config.nav.index_page = "home.html".to_string();
        let json = config.to_json().unwrap();
        assert_eq!(SiteConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_version_too_new_rejected() {
        let json = format!(r#"{{ "version": {} }}"#, CONFIG_VERSION + 1);
        let err = SiteConfig::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::VersionTooNew {
                file_version,
                supported_version: CONFIG_VERSION,
            } if file_version == CONFIG_VERSION + 1
        ));
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(matches!(
            SiteConfig::from_json("{ not json"),
            Err(ConfigError::ParseError(_))
        ));
        assert!(matches!(
            SiteConfig::from_json(r#"{ "log_level": "loud" }"#),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(LogLevel::Off.to_level_filter(), log::LevelFilter::Off);
        assert_eq!(
            LogLevel::default().to_level_filter(),
            log::LevelFilter::Warn
        );
        assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
    }
}
