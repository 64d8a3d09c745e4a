use anyhow::Result;
use fern::colors::{Color, ColoredLevelConfig};
use fern::Dispatch;
use log::LevelFilter;

/// Verbosity level for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Error messages only
    Error,
    /// Warning and error messages (default)
    Warning,
    /// Info, warning, and error messages
    Info,
    /// Debug, info, warning, and error messages
    Debug,
    /// Trace, debug, info, warning, and error messages
    Trace,
}

impl LogLevel {
    /// Convert verbosity level to log::LevelFilter
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }

    /// Get the verbosity level from the number of occurrences of a flag
    ///
    /// Per-file action lines are logged at Info, so a single `-v` makes
    /// them visible while errors and warnings always show.
    pub fn from_occurrences(occurrences: u8) -> Self {
        match occurrences {
            0 => LogLevel::Warning, // Default
            1 => LogLevel::Info,    // -v
            _ => LogLevel::Debug,   // -vv or more
        }
    }
}

/// Initialise the logger with the specified verbosity level
///
/// Error records are dispatched to stderr so that per-file failures stay
/// separate from the verbose action lines on stdout.
pub fn init_logger(verbosity: LogLevel) -> Result<()> {
    let colors_line = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::White)
        .debug(Color::White)
        .trace(Color::BrightBlack);

    let stdout_logger = Dispatch::new()
        .filter(|metadata| metadata.level() != log::Level::Error)
        .format(move |out, message, record| {
            out.finish(format_args!(
                "\x1B[{}m{}\x1B[0m",
                colors_line.get_color(&record.level()).to_fg_str(),
                message
            ))
        })
        .chain(std::io::stdout());

    let stderr_logger = Dispatch::new()
        .filter(|metadata| metadata.level() == log::Level::Error)
        .chain(std::io::stderr());

    Dispatch::new()
        .level(verbosity.to_level_filter())
        .chain(stdout_logger)
        .chain(stderr_logger)
        .apply()?;

    log::debug!("Logger initialized with verbosity level: {verbosity:?}");

    Ok(())
}

/// Format a message with colour support
pub fn format_message(message: &str, colored_message: &str) -> String {
    if atty::is(atty::Stream::Stdout) {
        colored_message.to_string()
    } else {
        message.to_string()
    }
}
