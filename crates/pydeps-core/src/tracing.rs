//! Tracing subscriber setup.
//!
//! Filter directives come from `PYDEPS_LOG` (same syntax as `RUST_LOG`),
//! falling back to the caller's default.

use std::sync::OnceLock;

use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives.
pub const LOG_ENV_VAR: &str = "PYDEPS_LOG";

static INIT: OnceLock<bool> = OnceLock::new();

/// Install the global fmt subscriber. Safe to call more than once; only the
/// first call has an effect. Returns whether this process owns the subscriber
/// (false when another subscriber was already installed).
pub fn init_tracing(default_directive: &str) -> bool {
    *INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(default_directive))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init()
            .is_ok()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let first = init_tracing("pydeps=debug");
        let second = init_tracing("pydeps=trace");
        assert_eq!(first, second);
        ::tracing::debug!("subscriber installed");
    }
}
