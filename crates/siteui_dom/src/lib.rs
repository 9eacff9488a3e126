//! siteui_dom - host seams for the siteui page behaviors
//!
//! Each capability the presentation components need from the browser sits
//! behind a small trait: class lists, origin-scoped storage, the preferred
//! color scheme, the viewport and deferred tasks. On `wasm32` the traits are
//! implemented over `web-sys`; the in-memory implementations work everywhere
//! and back the unit tests.

mod class;
mod error;
mod logging;
mod scheduler;
mod scheme;
mod storage;
mod viewport;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use class::{split_classes, ClassChange, ClassTarget, MemoryElement};
pub use error::DomError;
pub use logging::init_logging;
pub use scheduler::{ManualScheduler, Scheduler};
pub use scheme::{ColorScheme, ColorSchemeSignal, FixedScheme};
pub use storage::{MemoryStore, PreferenceStore};
pub use viewport::{MemoryViewport, Viewport};

#[cfg(target_arch = "wasm32")]
pub use scheduler::TimeoutScheduler;
#[cfg(target_arch = "wasm32")]
pub use scheme::MediaQueryScheme;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
#[cfg(target_arch = "wasm32")]
pub use viewport::WindowViewport;
