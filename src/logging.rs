//! Logger bootstrap for binaries and tests.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Filter applied when `RUST_LOG` is unset.
///
/// Other crates (Bevy included) stay at `warn`; this crate logs at debug when
/// `verbose` is set and at info otherwise.
#[must_use]
pub fn default_filter(verbose: bool) -> String {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    format!("{},{}={level}", LevelFilter::Warn, env!("CARGO_CRATE_NAME"))
}

/// Initializes the global logger.
///
/// With `verbose`, proximity crossings and normaliser attachments are printed
/// at debug level. Misattachment diagnostics surface at warn and failures at
/// error either way. `RUST_LOG` replaces [`default_filter`] entirely.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_filter(verbose));
    let mut builder = Builder::from_env(env);
    builder.format_target(true).format_timestamp(None);

    // A logger installed by the host application wins.
    if builder.try_init().is_err() {
        log::debug!("logger already initialised; keeping the existing one");
    }
}
