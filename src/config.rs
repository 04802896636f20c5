//! Command line arguments and the settings derived from them.

use std::num::NonZeroUsize;

use clap::{Parser, ValueEnum};

/// Capacity used when none, or a non-positive one, is given.
pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(capacity) => capacity,
    None => unreachable!(),
};

/// Format of the diagnostics written to stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human readable, multi-line events.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Print the largest distinct numbers found in stdin, smallest first.
#[derive(Debug, Parser)]
#[clap(name = "topdigits", version)]
pub struct Args {
    /// How many numbers to keep. Missing, unparsable, or non-positive
    /// values fall back to 100.
    #[clap(env = "TOPDIGITS_CAPACITY", allow_negative_numbers = true)]
    pub capacity: Option<String>,

    /// Diagnostics format.
    #[clap(long = "log-format", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

/// Normalized run settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Number of values the result set keeps.
    pub capacity: NonZeroUsize,
    /// Diagnostics format.
    pub log_format: LogFormat,
}

impl From<Args> for Settings {
    fn from(args: Args) -> Self {
        let capacity = args
            .capacity
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .and_then(|n| usize::try_from(n).ok())
            .and_then(NonZeroUsize::new)
            .unwrap_or(DEFAULT_CAPACITY);

        Self {
            capacity,
            log_format: args.log_format,
        }
    }
}
