//! Diagnostic logging for barb
//!
//! Traces go to stderr so they never mix with the per-file report lines on
//! stdout. The default level is WARN, which keeps skipped-target warnings
//! visible; verbose mode raises it to DEBUG. RUST_LOG overrides both.

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Initialize the stderr tracing subscriber.
pub fn init(verbose: bool) -> Result<()> {
    let default_filter = if verbose { "barb=debug,warn" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let subscriber = registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_file(false)
                .with_line_number(false),
        )
        .with(filter);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    Ok(())
}
