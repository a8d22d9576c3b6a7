//! Log setup
//!
//! Events go to `country-guess.log` in the data directory so they never
//! scribble over the TUI. Verbosity comes from the `-v` count unless
//! `RUST_LOG` is set.

use std::path::Path;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE: &str = "country-guess.log";

/// Filter for a given `-v` count
#[must_use]
pub fn filter_for(verbosity: u8) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    }
}

/// Install the global subscriber writing to `data_dir/country-guess.log`
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or a global
/// subscriber is already installed.
pub fn init(data_dir: &Path, verbosity: u8) -> anyhow::Result<()> {
    std::fs::create_dir_all(data_dir)?;
    let appender = tracing_appender::rolling::never(data_dir, LOG_FILE);

    tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbosity))
        .with_writer(appender)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}
