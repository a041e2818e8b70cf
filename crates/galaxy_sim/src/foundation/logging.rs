//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Filter used by [`init`] when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "info";

/// Initialize the logging system with the default filter
pub fn init() {
    init_with_level(DEFAULT_FILTER);
}

/// Initialize the logging system, falling back to `default_filter` when
/// `RUST_LOG` is not set.
///
/// Only the first call installs a logger; later calls are ignored.
pub fn init_with_level(default_filter: &str) {
    let installed =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
            .format_timestamp_millis()
            .try_init();
    if installed.is_err() {
        debug!("Logger already initialized, keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_is_harmless() {
        init();
        init_with_level("trace");
        info!("logging still works");
    }
}
