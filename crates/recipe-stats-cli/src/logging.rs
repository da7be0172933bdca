use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `RECIPE_STATS_LOG=debug`.
pub const LOG_ENV: &str = "RECIPE_STATS_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the stderr log subscriber. Stdout is reserved for the report.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
