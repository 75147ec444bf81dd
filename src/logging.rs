//! Logging
//!
//! Tracing subscriber setup for the CLI binaries. User-facing output goes
//! to stdout with `println!`; tracing carries diagnostics only.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the CLI logger.
///
/// `verbose` lowers the crate's level to debug. `RUST_LOG` overrides both.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("man_to_anki=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("man_to_anki=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}
