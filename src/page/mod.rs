//! Page behaviors other than the theme.
//!
//! Each component owns the elements it styles and exposes one method per
//! browser event it reacts to. Event binding lives in the `wasm32` entry
//! point; here everything is expressed over [`siteui_dom::ClassTarget`] so it
//! runs against in-memory elements too.

mod header;
mod menu;
mod nav;
mod scroll_top;
mod sidebar;

pub use header::HeaderScroll;
pub use menu::MobileMenu;
pub use nav::{ActiveNav, current_page};
pub use scroll_top::{ScrollToTop, button_class_name};
pub use sidebar::DashboardSidebar;
