//! Logging initialisation via tracing-subscriber.

use tracing::warn;
use tracing_subscriber::EnvFilter;

use std::env;

use crate::error::AppError;

/// The environment variable that overrides the configured log level.
pub const LOG_ENV: &str = "GAIAMAP_LOG";

/// Initialise the global tracing subscriber, logging to stderr.
///
/// `GAIAMAP_LOG` takes precedence over `level`. An invalid value of
/// the variable is ignored with a warning.
pub fn init(level: &str) -> Result<(), AppError> {
    let (filter, rejected) = filter(level, env::var(LOG_ENV).ok().as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logger(format!("failed to set subscriber: {}", e)))?;

    if let Some(value) = rejected {
        warn!(var = LOG_ENV, value = %value, configured = level, "invalid log filter, using configured level");
    }
    Ok(())
}

/// The filter from the environment value, if any and valid, else the one
/// for `level`. Also returns the environment value if it was rejected.
fn filter(level: &str, env: Option<&str>) -> Result<(EnvFilter, Option<String>), AppError> {
    let rejected = match env {
        Some(directives) => match EnvFilter::try_new(directives) {
            Ok(f) => return Ok((f, None)),
            Err(_) => Some(directives.to_string()),
        },
        None => None,
    };
    let f = EnvFilter::try_new(level)
        .map_err(|e| AppError::Logger(format!("invalid log level '{}': {}", level, e)))?;
    Ok((f, rejected))
}
