//! File operation functionality
//!
//! This module performs the side-effecting half of the program: renaming a
//! file in place or copying it to its transformed name, with an optional
//! confirmation prompt in front of either.

use std::fs::{rename, File};
use std::io;
use std::path::Path;

use colored::Colorize;
use log::debug;

use crate::errors::{
    file_operation_error, not_regular_file_error, source_not_found_error, Result,
};
use crate::logging::format_message;
use crate::prompt::{confirm, LineReader};

/// Which operation to perform on a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Rename the file in place
    Rename,
    /// Copy the file, preserving the original
    Copy,
}

/// What actually happened to a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The file was renamed to its new path
    Renamed,
    /// The file was copied to its new path
    Copied,
    /// Nothing was done (declined prompt, or nothing to change)
    Skipped,
}

/// Result of applying an operation to one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationOutcome {
    /// The action that was taken
    pub action: Action,
    /// Number of bytes transferred, for copies
    pub bytes_copied: Option<u64>,
}

impl OperationOutcome {
    fn skipped() -> OperationOutcome {
        OperationOutcome {
            action: Action::Skipped,
            bytes_copied: None,
        }
    }
}

/// Applies the requested operation, prompting first when interactive
///
/// # Arguments
/// * `source` - The file to rename or copy
/// * `target` - The transformed destination path
/// * `mode` - Whether to rename or copy
/// * `interactive` - Ask for confirmation before acting
/// * `reader` - Source of operator input for the confirmation prompt
///
/// # Returns
/// * `Result<OperationOutcome>` - The action taken, or an error from the
///   filesystem operation
pub fn apply<R: LineReader>(
    source: &Path,
    target: &Path,
    mode: OperationMode,
    interactive: bool,
    reader: &mut R,
) -> Result<OperationOutcome> {
    if interactive && !confirm_operation(source, target, mode, reader) {
        debug!("Declined: {}", source.display());
        return Ok(OperationOutcome::skipped());
    }

    match mode {
        OperationMode::Copy => {
            let bytes_copied = copy_file(source, target)?;
            Ok(OperationOutcome {
                action: Action::Copied,
                bytes_copied: Some(bytes_copied),
            })
        }
        OperationMode::Rename => {
            rename(source, target)
                .map_err(|e| file_operation_error(e, source.to_path_buf(), "rename"))?;
            Ok(OperationOutcome {
                action: Action::Renamed,
                bytes_copied: None,
            })
        }
    }
}

fn confirm_operation<R: LineReader>(
    source: &Path,
    target: &Path,
    mode: OperationMode,
    reader: &mut R,
) -> bool {
    let verb = match mode {
        OperationMode::Rename => "rename",
        OperationMode::Copy => "copy",
    };
    let question = format_message(
        &format!("sprm: {verb} '{}' to '{}'?", source.display(), target.display()),
        &format!(
            "sprm: {verb} '{}' to '{}'?",
            source.display().to_string().bold(),
            target.display().to_string().bold()
        ),
    );
    confirm(reader, &question)
}

/// Copies a regular file to the target path
///
/// The target is created or truncated, so an existing destination is
/// overwritten. The destination handle is synced and closed before
/// returning so that delayed write errors surface as the operation's
/// error rather than disappearing with the handle.
///
/// # Returns
/// * `Result<u64>` - The number of bytes copied
///
/// # Errors
/// * Returns an error if the source does not exist or is not a regular file
/// * Returns an error if any read, write, or close-time flush fails
pub fn copy_file(source: &Path, target: &Path) -> Result<u64> {
    let metadata = match std::fs::metadata(source) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(source_not_found_error(source.to_path_buf()));
        }
        Err(e) => return Err(file_operation_error(e, source.to_path_buf(), "stat")),
    };
    if !metadata.is_file() {
        return Err(not_regular_file_error(source.to_path_buf()));
    }

    let mut input = File::open(source)
        .map_err(|e| file_operation_error(e, source.to_path_buf(), "open"))?;
    let mut output = File::create(target)
        .map_err(|e| file_operation_error(e, target.to_path_buf(), "create"))?;

    let bytes_copied = io::copy(&mut input, &mut output)
        .map_err(|e| file_operation_error(e, target.to_path_buf(), "copy"))?;

    // Dropping the handle would swallow a delayed write failure
    output
        .sync_all()
        .map_err(|e| file_operation_error(e, target.to_path_buf(), "close"))?;

    Ok(bytes_copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::CannedLineReader;
    use std::fs;

    #[test]
    fn test_copy_file_reports_byte_count() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("a b.bin");
        let target = dir.path().join("ab.bin");
        fs::write(&source, vec![7u8; 100]).unwrap();

        let bytes_copied = copy_file(&source, &target).unwrap();

        assert_eq!(bytes_copied, 100);
        assert_eq!(fs::read(&target).unwrap(), vec![7u8; 100]);
        // The source is untouched
        assert_eq!(fs::read(&source).unwrap(), vec![7u8; 100]);
    }

    #[test]
    fn test_copy_file_overwrites_existing_target() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("src.txt");
        let target = dir.path().join("dst.txt");
        fs::write(&source, b"short").unwrap();
        fs::write(&target, b"a much longer previous content").unwrap();

        let bytes_copied = copy_file(&source, &target).unwrap();

        assert_eq!(bytes_copied, 5);
        assert_eq!(fs::read(&target).unwrap(), b"short");
    }

    #[test]
    fn test_copy_file_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("nope.txt");
        let target = dir.path().join("dst.txt");

        let error = copy_file(&source, &target).unwrap_err();
        assert!(
            format!("{error}").contains("not found"),
            "A missing source should report SourceNotFound"
        );
        assert!(!target.exists(), "No destination should be created");
    }

    #[test]
    fn test_copy_file_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("sub dir");
        fs::create_dir(&source).unwrap();
        let target = dir.path().join("subdir");

        let error = copy_file(&source, &target).unwrap_err();
        assert!(
            format!("{error}").contains("Not a regular file"),
            "Copying a directory should report NotRegularFile"
        );
    }

    #[test]
    fn test_apply_rename() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("my file.txt");
        let target = dir.path().join("my-file.txt");
        fs::write(&source, b"content").unwrap();

        let outcome = apply(
            &source,
            &target,
            OperationMode::Rename,
            false,
            &mut CannedLineReader::default(),
        )
        .unwrap();

        assert_eq!(outcome.action, Action::Renamed);
        assert_eq!(outcome.bytes_copied, None);
        assert!(!source.exists());
        assert_eq!(fs::read(&target).unwrap(), b"content");
    }

    #[test]
    fn test_apply_rename_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("gone file.txt");
        let target = dir.path().join("gone-file.txt");

        let result = apply(
            &source,
            &target,
            OperationMode::Rename,
            false,
            &mut CannedLineReader::default(),
        );
        assert!(result.is_err(), "Renaming a missing file should fail");
    }

    #[test]
    fn test_apply_interactive_decline() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("my file.txt");
        let target = dir.path().join("my-file.txt");
        fs::write(&source, b"content").unwrap();

        let mut reader = CannedLineReader::new("n\n");
        let outcome =
            apply(&source, &target, OperationMode::Copy, true, &mut reader).unwrap();

        assert_eq!(outcome.action, Action::Skipped);
        assert!(source.exists(), "Declining must leave the source alone");
        assert!(!target.exists(), "Declining must never create the target");
    }

    #[test]
    fn test_apply_interactive_accept() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("my file.txt");
        let target = dir.path().join("my-file.txt");
        fs::write(&source, b"content").unwrap();

        let mut reader = CannedLineReader::new("Yes\n");
        let outcome =
            apply(&source, &target, OperationMode::Copy, true, &mut reader).unwrap();

        assert_eq!(outcome.action, Action::Copied);
        assert_eq!(outcome.bytes_copied, Some(7));
        assert!(source.exists(), "Copy mode preserves the original");
    }

    #[test]
    fn test_apply_interactive_closed_stdin_declines() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("my file.txt");
        let target = dir.path().join("my-file.txt");
        fs::write(&source, b"content").unwrap();

        let mut reader = CannedLineReader::new("");
        let outcome =
            apply(&source, &target, OperationMode::Rename, true, &mut reader).unwrap();

        assert_eq!(outcome.action, Action::Skipped);
        assert!(source.exists());
        assert!(!target.exists());
    }
}
