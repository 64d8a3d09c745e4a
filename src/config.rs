//! Run configuration
//!
//! The parsed command-line arguments are folded once into an immutable
//! [`Config`] that is passed by reference everywhere else; no flag state
//! lives outside it.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::errors::{usage_error, Result};
use crate::file_ops::OperationMode;
use crate::logging::LogLevel;

/// How spaces in the stem are rewritten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceStyle {
    /// Delete spaces outright (default)
    Remove,
    /// Replace spaces with `-`
    Dash,
    /// Replace spaces with `_`
    Underscore,
}

impl SpaceStyle {
    /// The replacement string substituted for each space
    pub fn replacement(&self) -> &'static str {
        match self {
            SpaceStyle::Remove => "",
            SpaceStyle::Dash => "-",
            SpaceStyle::Underscore => "_",
        }
    }
}

/// Immutable configuration for one invocation
#[derive(Debug, Clone)]
pub struct Config {
    /// Rename in place or copy to the new name
    pub mode: OperationMode,
    /// Space rewriting style
    pub space_style: SpaceStyle,
    /// Characters to delete from each stem
    pub strip_chars: String,
    /// Ask before each rename/copy
    pub interactive: bool,
    /// Logging verbosity derived from `-v` occurrences
    pub verbosity: LogLevel,
    /// The file arguments, in input order
    pub files: Vec<PathBuf>,
}

impl Config {
    /// Builds a Config from parsed command-line arguments
    ///
    /// # Errors
    /// * Returns a usage error if both `--dash` and `--underscore` are given
    /// * Returns a usage error if no file arguments are given
    pub fn from_matches(matches: &ArgMatches) -> Result<Config> {
        let dash = matches.get_flag("dash");
        let underscore = matches.get_flag("underscore");
        if dash && underscore {
            return Err(usage_error(
                "sprm: --dash and --underscore are mutually exclusive",
            ));
        }

        let space_style = if dash {
            SpaceStyle::Dash
        } else if underscore {
            SpaceStyle::Underscore
        } else {
            SpaceStyle::Remove
        };

        let mode = if matches.get_flag("backup") {
            OperationMode::Copy
        } else {
            OperationMode::Rename
        };

        let files: Vec<PathBuf> = matches
            .get_many::<String>("files")
            .unwrap_or_default()
            .map(PathBuf::from)
            .collect();
        if files.is_empty() {
            return Err(usage_error("sprm: missing file operand"));
        }

        Ok(Config {
            mode,
            space_style,
            strip_chars: matches
                .get_one::<String>("strip")
                .cloned()
                .unwrap_or_default(),
            interactive: matches.get_flag("interactive"),
            verbosity: LogLevel::from_occurrences(matches.get_count("verbose")),
            files,
        })
    }
}
