/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Help text for the backup command-line option
pub const BACKUP_HELP: &str = "Make a copy instead of renaming in place";

/// Help text for the dash command-line option
pub const DASH_HELP: &str = "Replace spaces with dashes/hyphens";

/// Help text for the underscore command-line option
pub const UNDERSCORE_HELP: &str = "Replace spaces with underscores";

/// Help text for the interactive command-line option
pub const INTERACTIVE_HELP: &str = "Prompt before renaming/copying a file";

/// Help text for the strip command-line option
pub const STRIP_HELP: &str = "Remove the given characters from the filename";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Verbosely list files processed (can be used multiple times)";

/// Help text for the help command-line option
pub const HELP_HELP: &str = "Show this help message";

/// Help text for the positional file arguments
pub const FILES_HELP: &str = "File(s) to rename or copy";

/// Short usage message printed on invocation errors
pub const USAGE: &str = "Usage: sprm [OPTION...] FILE...\n\
                         Try `sprm --help' or `sprm -h' for more information";
