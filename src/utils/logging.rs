// ============================================================================
// Logging Setup
// ============================================================================

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a global `tracing` subscriber writing to stderr.
///
/// `RUST_LOG` wins over `default_directive` when set. Returns `false` if a
/// subscriber was already installed or the directive does not parse.
pub fn init_tracing(default_directive: &str) -> bool {
    let filter = match EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
    {
        Ok(filter) => filter,
        Err(_) => return false,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init()
        .is_ok()
}
