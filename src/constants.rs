//! Default selectors, class names and thresholds for the page behaviors.

/// Theme toggle defaults
pub mod theme {
    /// localStorage key holding the chosen theme
    pub const STORAGE_KEY: &str = "theme";
    /// Class on the root element that switches the stylesheet to dark
    pub const DARK_CLASS: &str = "dark";
    /// Selector shared by every theme toggle control
    pub const TOGGLE_SELECTOR: &str = ".theme-toggle";
}

/// Mobile navigation menu defaults
pub mod menu {
    pub const OPEN_BUTTON_ID: &str = "mobile-menu-btn";
    pub const PANEL_ID: &str = "mobile-menu";
    pub const CLOSE_BUTTON_ID: &str = "close-menu-btn";
    /// Present while the panel is slid off-screen
    pub const HIDDEN_CLASS: &str = "translate-x-full";
}

/// Header scroll styling defaults
pub mod header {
    pub const SELECTOR: &str = "header";
    /// Scroll offset (px) past which the header is styled as scrolled
    pub const SCROLL_THRESHOLD: f64 = 10.0;
    pub const SCROLLED_CLASSES: &[&str] = &[
        "shadow-md",
        "backdrop-blur-md",
        "bg-white/90",
        "dark:bg-slate-900/90",
    ];
    pub const TRANSPARENT_CLASS: &str = "bg-transparent";
}

/// Active navigation link defaults
pub mod nav {
    pub const LINK_SELECTOR: &str = "nav a";
    /// Page assumed when the path ends in `/`
    pub const INDEX_PAGE: &str = "index.html";
    pub const ACTIVE_CLASSES: &[&str] = &["text-primary-600", "dark:text-blue-400"];
    pub const HOVER_CLASSES: &[&str] = &["hover:text-primary-600", "dark:hover:text-blue-400"];
    pub const TRANSITION_CLASS: &str = "transition";
}

/// Scroll-to-top button defaults
pub mod scroll_top {
    pub const BUTTON_ID: &str = "scroll-to-top";
    pub const ICON_HTML: &str = r#"<i class="fa-solid fa-arrow-up"></i>"#;
    /// Scroll offset (px) past which the button is shown
    pub const SCROLL_THRESHOLD: f64 = 400.0;
    pub const BUTTON_CLASSES: &str = "fixed bottom-6 right-6 w-12 h-12 bg-primary-600 text-white rounded-full shadow-lg items-center justify-center transition-all duration-300 transform translate-y-20 opacity-0 z-50 hover:bg-primary-700 hover:-translate-y-1 active:scale-95 hidden lg:flex";
    /// Stripped from [`BUTTON_CLASSES`] so the button also shows below `lg`
    pub const DESKTOP_ONLY_CLASSES: &[&str] = &["hidden", "lg:flex"];
    pub const DISPLAY_CLASS: &str = "flex";
    pub const HIDDEN_CLASSES: &[&str] = &["translate-y-20", "opacity-0"];
    pub const VISIBLE_CLASSES: &[&str] = &["translate-y-0", "opacity-100"];
}

/// Dashboard sidebar defaults
pub mod sidebar {
    /// Icon inside the mobile toggle button; the button is its parent
    pub const TOGGLE_ICON_SELECTOR: &str = ".md\\:hidden button i.fa-bars";
    pub const SIDEBAR_SELECTOR: &str = "aside";
    pub const OVERLAY_SELECTOR: &str = ".sidebar-overlay";
    pub const OVERLAY_CLASSES: &str =
        "sidebar-overlay fixed inset-0 bg-black/50 z-10 hidden transition-opacity duration-300 opacity-0";
    /// Added while the sidebar floats over the page on small screens
    pub const OPEN_CLASSES: &[&str] = &["fixed", "inset-y-0", "left-0", "w-64"];
    pub const HIDDEN_CLASS: &str = "hidden";
    pub const DISPLAY_CLASS: &str = "flex";
    pub const OVERLAY_VISIBLE_CLASS: &str = "opacity-100";
    /// Delay before the overlay fades in, letting `hidden` removal paint first
    pub const FADE_IN_DELAY_MS: u64 = 10;
    /// Matches the overlay's `duration-300` transition
    pub const FADE_OUT_DELAY_MS: u64 = 300;
}

/// Config element read at startup
pub const CONFIG_ELEMENT_ID: &str = "siteui-config";
