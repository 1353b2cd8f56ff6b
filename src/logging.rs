use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. `RUST_LOG` wins over the verbosity flag.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    // Ignore error if a global subscriber is already set (e.g., when running in tests)
    let _ = tracing::subscriber::set_global_default(subscriber);
}
