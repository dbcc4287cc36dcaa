mod args;
mod parsers;
mod value_enum;

use std::{path::Path, time::Duration};

pub use args::Args;
use clap::Parser;
use novel_count_infra::settings::SettingsOverrides;
use novel_count_shared_kernel::{PresentationError, Result};
pub use parsers::RangeArg;
pub use value_enum::{CliCountUnit, CliOffsetEncoding, CliStatusFormat};

use crate::{
    config::{Config, DocumentInput},
    logging,
};

/// Parse the process arguments into a [`Config`].
///
/// # Errors
///
/// Returns a presentation error when argument combinations are invalid.
pub fn load_config() -> Result<Config> {
    build_config(Args::parse())
}

/// Validate `args` and resolve them into a [`Config`].
///
/// # Errors
///
/// Returns a presentation error when argument combinations are invalid.
pub fn build_config(args: Args) -> Result<Config> {
    validate_watch_interval("--watch-interval", args.watch_interval)?;

    let input = match args.path {
        None => DocumentInput::Stdin,
        Some(path) if path == Path::new("-") => DocumentInput::Stdin,
        Some(path) => DocumentInput::File(path),
    };
    if args.watch && input == DocumentInput::Stdin {
        return Err(PresentationError::InvalidValue {
            flag: "--watch".to_string(),
            value: "-".to_string(),
            reason: "standard input cannot be watched; pass a file path".to_string(),
        }
        .into());
    }

    Ok(Config {
        input,
        selections: args.ranges.into_iter().map(|RangeArg(range)| range).collect(),
        language: args.language,
        settings_path: args.config,
        overrides: SettingsOverrides {
            additional_language: args.additional_language,
            count_unit: args.unit.map(Into::into),
            offset_encoding: args.offsets.map(Into::into),
        },
        format: args.format.into(),
        watch: args.watch,
        watch_interval: Duration::from_millis(args.watch_interval),
        log_level: logging::level_from_flags(args.verbose, args.quiet),
    })
}

fn validate_watch_interval(flag: &str, interval: u64) -> Result<()> {
    if interval == 0 {
        return Err(PresentationError::InvalidValue {
            flag: flag.to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        }
        .into());
    }
    Ok(())
}
