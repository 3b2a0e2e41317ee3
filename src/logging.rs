// src/logging.rs
use log::LevelFilter;

/// Environment variable overriding the level chosen by `-v` flags.
pub const LOG_ENV: &str = "TINY_CHECKS_LOG";

pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. Safe to call more than once; later calls are ignored.
pub fn init(verbose: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for(verbose))
        .parse_env(LOG_ENV)
        .format_timestamp(None)
        .format_target(false);
    let _ = builder.try_init();
}
