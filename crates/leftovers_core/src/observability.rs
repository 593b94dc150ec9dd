//! Tracing subscriber initialization.

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    /// Reads `LEFTOVERS_LOG_FORMAT`, falling back to [`LogFormat::Pretty`].
    pub fn from_env() -> Self {
        std::env::var("LEFTOVERS_LOG_FORMAT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }
}

/// Install the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set and defaults to `info`.
/// Calling this more than once is harmless: later calls leave the existing
/// subscriber in place.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = match format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
            .is_ok(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init()
            .is_ok(),
    };

    if installed {
        info!(format = %format, "Tracing initialized");
    } else {
        debug!("Tracing subscriber already installed");
    }
}
