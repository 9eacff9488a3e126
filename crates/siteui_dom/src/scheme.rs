//! The host's preferred color scheme.

/// Color scheme reported by the operating environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    /// Light scheme, also the answer when the host expresses no preference
    #[default]
    Light,
    /// Dark scheme
    Dark,
}

/// Read-only signal for the host's preferred color scheme.
pub trait ColorSchemeSignal {
    /// Current preference. Hosts that cannot answer report [`ColorScheme::Light`].
    fn color_scheme(&self) -> ColorScheme;
}

/// A signal that always reports the same scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedScheme(pub ColorScheme);

impl FixedScheme {
    /// A host that prefers dark.
    pub fn dark() -> Self {
        Self(ColorScheme::Dark)
    }

    /// A host that prefers light.
    pub fn light() -> Self {
        Self(ColorScheme::Light)
    }
}

impl ColorSchemeSignal for FixedScheme {
    fn color_scheme(&self) -> ColorScheme {
        self.0
    }
}

/// `prefers-color-scheme` via `window.matchMedia`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct MediaQueryScheme {
    window: web_sys::Window,
}

#[cfg(target_arch = "wasm32")]
impl MediaQueryScheme {
    const DARK_QUERY: &'static str = "(prefers-color-scheme: dark)";

    /// Query through the given window.
    pub fn new(window: web_sys::Window) -> Self {
        Self { window }
    }
}

#[cfg(target_arch = "wasm32")]
impl ColorSchemeSignal for MediaQueryScheme {
    fn color_scheme(&self) -> ColorScheme {
        match self.window.match_media(Self::DARK_QUERY) {
            Ok(Some(list)) if list.matches() => ColorScheme::Dark,
            Ok(Some(_)) => ColorScheme::Light,
            Ok(None) => {
                log::debug!("matchMedia unsupported, assuming light scheme");
                ColorScheme::Light
            }
            Err(e) => {
                log::warn!("matchMedia failed: {:?}", e);
                ColorScheme::Light
            }
        }
    }
}
