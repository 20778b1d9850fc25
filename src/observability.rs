use anyhow::Result;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing and logging
///
/// `RUST_LOG` takes precedence over the configured `log_level`. The `json`
/// format emits one structured object per event; `pretty` is meant for a
/// terminal.
pub fn init_observability(
    service_name: &str,
    service_version: &str,
    log_level: &str,
    log_format: &str,
) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    if log_format == "json" {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_filter(env_filter))
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true)
                    .with_filter(env_filter),
            )
            .try_init()?;
    }

    tracing::info!(
        service.name = service_name,
        service.version = service_version,
        log.format = log_format,
        "Observability initialized"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observability_init_only_once() {
        let first = init_observability("test-service", "0.1.0", "debug", "json");
        assert!(first.is_ok(), "first init should succeed: {:?}", first.err());

        // The global subscriber is already set
        assert!(init_observability("test-service", "0.1.0", "debug", "pretty").is_err());
    }
}
