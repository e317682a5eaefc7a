//! Tracing bootstrap for binaries and test harnesses embedding flowreport.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive, e.g. `flowreport_xml=debug`.
pub const LOG_ENV_VAR: &str = "FLOWREPORT_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Install a fmt subscriber filtered by `FLOWREPORT_LOG`.
///
/// Returns false if a global subscriber was already installed, which makes
/// repeated calls harmless.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
