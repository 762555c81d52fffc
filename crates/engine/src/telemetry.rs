use eyre::Result;
use tracing_subscriber::FmtSubscriber;

use crate::config::EngineConfig;

/// Installs a global fmt subscriber at the configured level.
///
/// Fails if a global subscriber is already set.
pub fn init_tracing(config: &EngineConfig) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
