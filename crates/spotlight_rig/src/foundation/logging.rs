//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize logging, falling back to `default_filter` when `RUST_LOG` is unset
pub fn init_with_default(default_filter: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}
