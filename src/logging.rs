//! Log setup shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `MANATEXT_LOG=manatext=debug`.
pub const LOG_ENV: &str = "MANATEXT_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Installs a stderr subscriber filtered by [`LOG_ENV`]. Safe to call twice.
pub fn init_from_env() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
