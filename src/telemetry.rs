//! Log subscriber setup.
//!
//! Installed once by the binary. Library code only emits `tracing` events.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LogFormat;
use crate::error::Error;

/// Installs the global subscriber filtered by `directive`.
pub fn init(directive: &str, format: LogFormat) -> Result<(), Error> {
    let filter = EnvFilter::try_new(directive).map_err(|source| Error::LogFilter {
        directive: directive.to_owned(),
        source,
    })?;

    let (pretty, json) = match format {
        LogFormat::Pretty => (Some(fmt::layer()), None),
        LogFormat::Json => (None, Some(fmt::layer().json())),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(json)
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_filter_is_reported_before_install() {
        let err = init("carlot=loud", LogFormat::Pretty).unwrap_err();
        assert!(matches!(err, Error::LogFilter { .. }));
        assert!(err.to_string().contains("carlot=loud"));
    }
}
