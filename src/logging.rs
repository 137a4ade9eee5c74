//! One-time tracing setup for the library.
//!
//! The library runs inside a host process that may have its own tracing
//! subscriber installed, so initialization is best-effort: `try_init` loses
//! quietly if a global subscriber already exists. The filter comes from
//! `VXPAD_LOG` and defaults to `warn`; a drop-in input library should not
//! chat on the host's stderr.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the tracing subscriber. Safe to call any number of times; only
/// the first call does anything.
pub fn init() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("VXPAD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init();
    });
}
