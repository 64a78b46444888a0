use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,matcha_api=debug,matcha_core=debug";

/// Install the global subscriber. Logs go to stderr; `RUST_LOG` overrides
/// the default filter.
pub fn init() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .init();
}
