//! Filename transformation
//!
//! This module contains the pure transformation from an original path to
//! its cleaned-up counterpart. No filesystem access happens here; the same
//! request always yields the same result.

use std::path::{Path, PathBuf};

use crate::errors::{empty_filename_error, invalid_filename_error, Result};

/// Immutable description of a single filename transformation
///
/// Borrowed by [`transformed_path`]; construct one per file argument.
#[derive(Debug, Clone, Copy)]
pub struct TransformRequest<'a> {
    /// The path whose base name should be cleaned up
    pub original_path: &'a Path,
    /// What to substitute for each space in the stem (may be empty)
    pub space_replacement: &'a str,
    /// Characters to delete from the stem before space replacement
    pub strip_chars: &'a str,
}

/// Computes the transformed path for a request
///
/// The base name is split into stem and extension, the strip characters
/// are removed from the stem, spaces in the stem are replaced, and the
/// untouched extension is appended back before rejoining with the
/// directory.
///
/// # Errors
/// * Returns an error if the base name is not valid Unicode
/// * Returns an error if the transformation deletes the entire base name
pub fn transformed_path(request: &TransformRequest) -> Result<PathBuf> {
    let path = request.original_path;
    let filename = path
        .file_name()
        .ok_or_else(|| invalid_filename_error(path.to_path_buf()))?
        .to_str()
        .ok_or_else(|| invalid_filename_error(path.to_path_buf()))?;

    let (stem, extension) = split_extension(filename);

    let mut stem = stem.to_string();
    if !request.strip_chars.is_empty() {
        stem = strip_characters(&stem, request.strip_chars);
    }
    stem = stem.replace(' ', request.space_replacement);

    let new_filename = format!("{stem}{extension}");
    if new_filename.is_empty() {
        return Err(empty_filename_error(path.to_path_buf()));
    }

    Ok(match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(new_filename),
        _ => PathBuf::from(new_filename),
    })
}

/// Splits a base name into stem and extension
///
/// The extension runs from the last `.` to the end of the name, inclusive.
/// A dot at position 0 does not start an extension, so dotfiles like
/// `.gitignore` are treated as extensionless and transformed wholly.
pub fn split_extension(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(index) if index > 0 => filename.split_at(index),
        _ => (filename, ""),
    }
}

/// Removes every occurrence of every character in `chars` from `value`
///
/// Plain character-set deletion, order-preserving; `chars` carries no
/// regex or escape semantics.
fn strip_characters(value: &str, chars: &str) -> String {
    value
        .chars()
        .filter(|character| !chars.contains(*character))
        .collect()
}
