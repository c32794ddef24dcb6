//! Tracing subscriber bootstrap.
//!
//! Logs go to stderr so they never interleave with the menu on stdout. The filter is
//! taken from `GRADEBOOK_LOG` when set, otherwise `debug` for verbose runs and `warn`
//! for everything else.
//!
//! Initialization is idempotent and never panics: a second call, or a call after
//! another subscriber was installed, is a no-op.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV: &str = "GRADEBOOK_LOG";

pub fn default_log_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)))
}

/// Installs the global subscriber. Returns `false` if one was already installed.
pub fn init_logging(verbose: bool) -> bool {
    let installed = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(build_filter(verbose))
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(
            version = env!("CARGO_PKG_VERSION"),
            platform = std::env::consts::OS,
            "logging initialized"
        );
    }
    installed
}
