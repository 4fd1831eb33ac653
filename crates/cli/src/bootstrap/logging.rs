use nameroute_domain::ResolutionConfig;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so command output on stdout stays machine-readable.
/// `RUST_LOG` wins over the configured level.
pub fn init_logging(config: &ResolutionConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
