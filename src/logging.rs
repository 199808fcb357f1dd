use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "nfl_history_scraper=info";

/// Installs the console subscriber. `RUST_LOG` overrides the default level.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
