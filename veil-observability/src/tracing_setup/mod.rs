//! Tracing setup: structured logging with event helpers.

pub mod events;

use tracing_subscriber::EnvFilter;
use veil_core::config::ObservabilityConfig;

/// Environment variable holding a full `EnvFilter` directive.
pub const LOG_FILTER_ENV: &str = "VEIL_LOG";

/// Initialize the global tracing subscriber.
///
/// `VEIL_LOG` wins over `config.log_level` when set. Returns `false` if a
/// global subscriber was already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if config.json_logs {
        builder
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
            .is_ok()
    } else {
        builder.try_init().is_ok()
    }
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .json()
        .try_init()
        .is_ok()
}
