use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Console logging via tracing-subscriber. `RUST_LOG` wins when set;
/// otherwise the configured level applies, escalated by `-v` flags.
pub fn init(configured_level: &str, verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => configured_level,
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}
