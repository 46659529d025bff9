//! Diagnostic tracing to stderr.
//!
//! `PONTOCERTO_LOG` takes any `EnvFilter` directive (`debug`,
//! `pontocerto=trace`, ...); without it the config `log_level` applies.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PONTOCERTO_LOG";

pub fn init(fallback_level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(fallback_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (tests calling run() twice) is not an error
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
