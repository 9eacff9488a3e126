//! Logger installation.

/// Install the platform logger at the given level.
///
/// Uses the browser console on `wasm32` and `env_logger` elsewhere. Calling
/// this more than once keeps the first logger and only updates the level.
pub fn init_logging(level: log::LevelFilter) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(max) = level.to_level() {
            if console_log::init_with_level(max).is_err() {
                log::debug!("Logger already initialized");
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        if env_logger::Builder::new()
            .filter_level(level)
            .try_init()
            .is_err()
        {
            log::debug!("Logger already initialized");
        }
    }

    log::set_max_level(level);
}
