//! siteui - presentation behaviors for the marketing site
//!
//! Theme toggling with a persisted preference, the mobile menu, scroll
//! styling, active navigation links, the scroll-to-top button and the
//! dashboard sidebar. Compiled to WebAssembly, the crate wires itself to the
//! page on load; on other targets the components run against the in-memory
//! hosts from `siteui_dom`.

pub mod config;
pub mod constants;
pub mod page;
pub mod theme;

pub use config::{ConfigError, LogLevel, SiteConfig};
pub use theme::{ThemeController, ThemePreference, resolve_theme};

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
