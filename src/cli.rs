use clap::{command, crate_authors, crate_description, crate_name, crate_version, Arg, Command};

use crate::constants::{
    BACKUP_HELP, DASH_HELP, FILES_HELP, HELP_HELP, INTERACTIVE_HELP, STRIP_HELP,
    UNDERSCORE_HELP, VERBOSE_HELP,
};

/// Sets up the command-line argument definition
///
/// Defines the following arguments:
/// - `files`: The file paths to process (positional)
/// - `backup`: Copy instead of renaming in place
/// - `dash` / `underscore`: Space replacement style
/// - `interactive`: Prompt before each action
/// - `strip`: Characters to delete from the stem
/// - `verbose`: Increase verbosity level
/// - `help`: Print the help text to standard error
///
/// The dash/underscore conflict and the missing-operand case are checked
/// when the matches are folded into a `Config`, so that both exit with
/// status 1 as usage errors rather than clap's parse failure code. The
/// help flag is hand-rolled rather than clap's built-in so that `-?`
/// works as an alias and the text lands on stderr.
///
/// # Returns
/// * `Command` - The clap command definition
pub fn build_command() -> Command {
    // positional file arguments, validated later so zero operands can be
    // reported as a usage error
    let arg_files = Arg::new("files")
        .help(FILES_HELP)
        .num_args(0..)
        .value_name("FILE");

    // define arg for backup (copy) mode
    let arg_backup = Arg::new("backup")
        .short('b')
        .long("backup")
        .help(BACKUP_HELP)
        .action(clap::ArgAction::SetTrue);

    // define arg for dash replacement
    let arg_dash = Arg::new("dash")
        .short('d')
        .long("dash")
        .help(DASH_HELP)
        .action(clap::ArgAction::SetTrue);

    // define arg for underscore replacement
    let arg_underscore = Arg::new("underscore")
        .short('u')
        .long("underscore")
        .help(UNDERSCORE_HELP)
        .action(clap::ArgAction::SetTrue);

    // define arg for interactive confirmation
    let arg_interactive = Arg::new("interactive")
        .short('i')
        .long("interactive")
        .help(INTERACTIVE_HELP)
        .action(clap::ArgAction::SetTrue);

    // define arg for the strip character set
    let arg_strip = Arg::new("strip")
        .short('s')
        .long("strip")
        .help(STRIP_HELP)
        .value_name("CHARS");

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(clap::ArgAction::Count);

    // define arg for help, replacing clap's built-in so `-?` works too
    // and the text can be sent to stderr
    let arg_help = Arg::new("help")
        .short('h')
        .short_alias('?')
        .long("help")
        .help(HELP_HELP)
        .action(clap::ArgAction::SetTrue);

    command!()
        .disable_help_flag(true)
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_files)
        .arg(arg_backup)
        .arg(arg_dash)
        .arg(arg_underscore)
        .arg(arg_interactive)
        .arg(arg_strip)
        .arg(arg_verbose)
        .arg(arg_help)
}
