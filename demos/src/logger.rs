//! Log output for the demos.
//!
//! The algoviz crates log through the `log` facade. [`init`] installs a
//! `tracing-subscriber` formatter, which also bridges `log` records, and
//! filters them with the `EnvFilter` directives found in `ALGOVIZ_LOG`
//! (`debug`, `algoviz_playback=trace,warn`, ...). Logging is off when the
//! variable is unset. The demos draw on the alternate screen, so redirect
//! stderr to a file to read the output.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "ALGOVIZ_LOG";

/// Build the filter for `directives`; missing or malformed input turns
/// logging off.
pub fn filter_for(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d.trim()).ok())
        .unwrap_or_else(|| EnvFilter::new("off"))
}

/// Install the subscriber. Calling it twice is harmless.
pub fn init() {
    let directives = std::env::var(LOG_ENV).ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(directives.as_deref()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
