//! Per-file driver
//!
//! Files are processed sequentially and independently: the transformed
//! path is computed, the operation is applied, and the outcome is
//! reported. One file's failure never blocks the files after it.

use std::path::Path;

use colored::Colorize;
use log::{error, info, warn};

use crate::config::Config;
use crate::errors::Result;
use crate::file_ops::{apply, Action, OperationOutcome};
use crate::logging::format_message;
use crate::prompt::LineReader;
use crate::transform::{transformed_path, TransformRequest};

/// Processes every file argument in input order
///
/// Per-file errors are logged with context and iteration continues; no
/// retries are made.
///
/// # Returns
/// * `usize` - The number of files that failed
pub fn run<R: LineReader>(config: &Config, reader: &mut R) -> usize {
    let mut failures = 0;

    for file in &config.files {
        match process_file(file, config, reader) {
            Ok(outcome) => report_outcome(file, config, &outcome),
            Err(err) => {
                error!("Error: {err}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        warn!("{failures} file(s) could not be processed");
    }

    failures
}

/// Computes the transformed path for one file and applies the operation
///
/// When the transformation leaves the path unchanged there is nothing to
/// do; the file is skipped before any prompt or filesystem call, which
/// also avoids copying a file onto itself in backup mode.
pub fn process_file<R: LineReader>(
    file: &Path,
    config: &Config,
    reader: &mut R,
) -> Result<OperationOutcome> {
    let request = TransformRequest {
        original_path: file,
        space_replacement: config.space_style.replacement(),
        strip_chars: &config.strip_chars,
    };
    let target = transformed_path(&request)?;

    if target == file {
        return Ok(OperationOutcome {
            action: Action::Skipped,
            bytes_copied: None,
        });
    }

    apply(file, &target, config.mode, config.interactive, reader)
}

fn report_outcome(file: &Path, config: &Config, outcome: &OperationOutcome) {
    let request = TransformRequest {
        original_path: file,
        space_replacement: config.space_style.replacement(),
        strip_chars: &config.strip_chars,
    };
    // Recomputed for reporting only; the transformation is pure
    let target = match transformed_path(&request) {
        Ok(target) => target,
        Err(_) => return,
    };

    match outcome.action {
        Action::Renamed => {
            info!(
                "{}",
                format_message(
                    &format!("renamed file: {} -> {}", file.display(), target.display()),
                    &format!(
                        "renamed file: {} -> {}",
                        file.display(),
                        target.display().to_string().bold()
                    ),
                )
            );
        }
        Action::Copied => {
            let bytes = outcome.bytes_copied.unwrap_or(0);
            info!(
                "{}",
                format_message(
                    &format!(
                        "copied file: {} -> {} ({bytes} bytes)",
                        file.display(),
                        target.display()
                    ),
                    &format!(
                        "copied file: {} -> {} ({bytes} bytes)",
                        file.display(),
                        target.display().to_string().bold()
                    ),
                )
            );
        }
        Action::Skipped => {
            info!("skipped file: {}", file.display());
        }
    }
}
