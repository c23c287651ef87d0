use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Install the status-line subscriber.
///
/// Everything goes to stderr so stdout only ever carries the key. The level
/// comes from `RUST_LOG` and defaults to `info`.
pub fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))
}
