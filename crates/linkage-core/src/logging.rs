//! Logging setup for hosts embedding the comparators.
//!
//! The library only emits `tracing` events; nothing is printed unless the
//! host installs a subscriber, for example with [`init`].

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing with the default `info` filter.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init() -> bool {
    init_with_filter("info")
}

/// Initialize tracing with a custom default filter.
///
/// `RUST_LOG` takes precedence, e.g. `RUST_LOG=linkage_core=trace` shows
/// every extracted substring.
pub fn init_with_filter(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init()
        .is_ok()
}
