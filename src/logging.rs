//! Diagnostic tracing
//!
//! Tracing is for debugging the solver and the screens; it is not part of the
//! program's output. Events go to stderr, so keep `RUST_LOG` unset (or at
//! `warn`) when animating, or redirect stderr.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`; defaults to `warn` if unset.
///
/// # Example
/// ```bash
/// RUST_LOG=hanoi=trace hanoi --list --disks 3 2> trace.log
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
