//! Vertical scroll position of the page.

use std::cell::Cell;
use std::rc::Rc;

/// The scrollable page viewport.
pub trait Viewport {
    /// Vertical scroll offset in CSS pixels.
    fn scroll_y(&self) -> f64;

    /// Scroll back to the top of the page.
    fn scroll_to_top(&self);
}

impl<T: Viewport + ?Sized> Viewport for Rc<T> {
    fn scroll_y(&self) -> f64 {
        (**self).scroll_y()
    }

    fn scroll_to_top(&self) {
        (**self).scroll_to_top();
    }
}

/// In-memory viewport for tests.
#[derive(Debug, Default)]
pub struct MemoryViewport {
    scroll_y: Cell<f64>,
    scroll_to_top_calls: Cell<usize>,
}

impl MemoryViewport {
    /// Create a viewport scrolled to the top.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretend the user scrolled to `y`.
    pub fn set_scroll_y(&self, y: f64) {
        self.scroll_y.set(y);
    }

    /// How many times [`Viewport::scroll_to_top`] was requested.
    pub fn scroll_to_top_calls(&self) -> usize {
        self.scroll_to_top_calls.get()
    }
}

impl Viewport for MemoryViewport {
    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn scroll_to_top(&self) {
        let calls = self.scroll_to_top_calls.get();
        self.scroll_to_top_calls.set(calls + 1);
        self.scroll_y.set(0.0);
    }
}

/// The browser window's viewport.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct WindowViewport {
    window: web_sys::Window,
}

#[cfg(target_arch = "wasm32")]
impl WindowViewport {
    /// Wrap a window.
    pub fn new(window: web_sys::Window) -> Self {
        Self { window }
    }
}

#[cfg(target_arch = "wasm32")]
impl Viewport for WindowViewport {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or_else(|e| {
            log::warn!("Failed to read scrollY: {:?}", e);
            0.0
        })
    }

    fn scroll_to_top(&self) {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}
