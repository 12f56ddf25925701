use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize a tracing subscriber for build logs.
///
/// Uses the `RUST_LOG` environment variable to pick the level, defaulting to
/// `info` so the plugin's cache and config messages show up in the build log.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer().with_target(false).with_level(true).compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_init_is_repeatable() {
        // Only the first init in a process can succeed
        let _ = init();
        assert!(init().is_err());
        tracing::info!("logging initialized");
    }
}
