use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the sprm application
#[derive(Debug)]
pub enum Error {
    /// Error in the command-line invocation itself
    Usage { message: String },
    /// Error when the source of a copy does not exist
    SourceNotFound { path: PathBuf },
    /// Error when the source of a copy is not a regular file
    NotRegularFile { path: PathBuf },
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error when a filename is not valid Unicode
    InvalidFilename { path: PathBuf },
    /// Error when a transformation leaves nothing of the filename
    EmptyFilename { path: PathBuf },
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Usage { message } => {
                write!(f, "{message}")
            }
            Error::SourceNotFound { path } => {
                write!(f, "Source file not found: {}", path.display())
            }
            Error::NotRegularFile { path } => {
                write!(f, "Not a regular file: {}", path.display())
            }
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::InvalidFilename { path } => {
                write!(f, "Filename is not valid unicode: {}", path.display())
            }
            Error::EmptyFilename { path } => {
                write!(
                    f,
                    "Transformation leaves an empty filename: {}",
                    path.display()
                )
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::FileOperation {
            source: err,
            path: PathBuf::new(),
            operation: "perform operation on".to_string(),
        }
    }
}

/// Custom Result type for the sprm application
///
/// This type alias simplifies error handling throughout the application by
/// using the custom Error type. It's used as the return type for most
/// functions that can fail.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a usage error
pub fn usage_error(message: &str) -> Error {
    Error::Usage {
        message: message.to_string(),
    }
}

/// Helper function to create a source-not-found error
pub fn source_not_found_error(path: PathBuf) -> Error {
    Error::SourceNotFound { path }
}

/// Helper function to create a not-a-regular-file error
pub fn not_regular_file_error(path: PathBuf) -> Error {
    Error::NotRegularFile { path }
}

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

/// Helper function to create an empty filename error
pub fn empty_filename_error(path: PathBuf) -> Error {
    Error::EmptyFilename { path }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}
