//! Logging utilities
//!
//! The core logs per-frame gesture decisions at `debug`, placement and
//! scene lifecycle events at `info`, and skipped restore records at `warn`.

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system from the `RUST_LOG` environment variable
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system with a default filter when `RUST_LOG` is unset
pub fn init_with_default(filter: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}
