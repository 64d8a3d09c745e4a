pub use config::*;
pub use errors::*;
pub use file_ops::*;
pub use processor::*;
pub use transform::*;

pub mod cli;
mod config;
pub mod constants;
mod errors;
mod file_ops;
pub mod logging;
mod processor;
pub mod prompt;
mod transform;

pub mod prelude {
    pub use crate::cli::build_command;
    pub use crate::errors::{
        empty_filename_error, file_operation_error, generic_error, invalid_filename_error,
        not_regular_file_error, source_not_found_error, usage_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{format_message, init_logger, LogLevel};
    pub use crate::{run, Config};
}
