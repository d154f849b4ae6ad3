//! # Logging Setup
//!
//! tracing-subscriber initialization for the storefront.
//!
//! The embedding shell calls [`init`] once at startup. Default level is
//! INFO; override with `RUST_LOG` (e.g. `RUST_LOG=lumiere_storefront=debug`
//! to see every command invocation).

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// Safe to call more than once: subsequent calls are no-ops (useful in
/// tests, where several test binaries may race to install a subscriber).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .ok();
}
