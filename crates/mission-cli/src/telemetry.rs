//! Logging setup for the command line.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a stderr subscriber; `RUST_LOG` overrides the default filter
pub fn init_telemetry(verbose: bool) -> Result<()> {
    let default_filter = if verbose {
        "debug"
    } else {
        "warn,mission_lineage=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    tracing::debug!("Telemetry initialized");
    Ok(())
}
