//! Logger setup for the CLI
//!
//! Library code only uses the `log` macros; the binary installs `env_logger`
//! once at startup. `PITH_LOG` takes an env_logger filter string and wins over
//! the verbosity flags.

use log::LevelFilter;

pub const LOG_ENV: &str = "PITH_LOG";

/// Map `-v` occurrences to a level: warn by default, then info, debug, trace.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger, writing to stderr.
pub fn init(verbose: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for_verbosity(verbose))
        .format_timestamp(None)
        .format_target(false)
        .parse_env(env_logger::Env::new().filter(LOG_ENV));
    // A logger may already be installed when called twice (e.g. from tests).
    let _ = builder.try_init();
}
