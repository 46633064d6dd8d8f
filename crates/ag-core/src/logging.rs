//! `tracing` subscriber setup for binaries and tests that embed the agenda
//! crates. The libraries only emit events; installing a subscriber is the
//! host's decision.

use tracing_subscriber::EnvFilter;

use crate::errors::{Error, Result};
use crate::settings::Settings;

/// Install a formatting subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter`. Calling this twice is
/// harmless: the second install is skipped and reported at debug level.
pub fn init_tracing(default_filter: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| Error::Config(format!("invalid log filter {default_filter:?}: {e}")))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .try_init();

    if let Err(err) = init_result {
        tracing::debug!(error = %err, "tracing subscriber already set, continuing");
    }

    Ok(())
}

/// [`init_tracing`] with the `[logging] filter` of `settings`.
pub fn init_tracing_from_settings(settings: &Settings) -> Result<()> {
    init_tracing(&settings.logging.filter)
}
