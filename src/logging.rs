//! Diagnostic logging setup.
//!
//! Events go to stderr so report output on stdout stays clean. The filter
//! comes from `CODEMENTOR_LOG` (e.g. `CODEMENTOR_LOG=codementor=debug`),
//! falling back to `debug` when verbose and `warn` otherwise.

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "CODEMENTOR_LOG";

/// Build the filter for the given verbosity.
pub fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "codementor=debug" } else { "warn" })
    })
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let _ = fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Initialize tracing for tests with a simple subscriber
#[cfg(test)]
pub fn init_test_tracing() {
    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_test_tracing();
        init(true);
        init(false);
        tracing::debug!("still logging");
    }
}
