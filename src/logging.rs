// src/logging.rs
//! Terminal logging for the binary.
//!
//! Library crates log through the `log` facade; only the binary installs a
//! logger. Everything goes to stderr so stdout carries nothing but counts.

use log::LevelFilter;
use novel_count_shared_kernel::{PresentationError, PresentationResult};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Map `-v` repetitions and `-q` to a level; the default shows warnings and errors.
pub fn level_from_flags(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global terminal logger.
///
/// # Errors
///
/// Fails if a logger has already been installed in this process.
pub fn init(level: LevelFilter) -> PresentationResult<()> {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Debug)
        .build();
    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)
        .map_err(|err| PresentationError::LoggerInit(err.to_string()))
}

/// Initializes a logger for tests; a no-op when one is already set.
#[cfg(test)]
pub fn initialize_for_tests() {
    let _ = init(LevelFilter::Debug);
}
