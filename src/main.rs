use std::process::exit;

use human_panic::setup_panic;

use sprm::cli::build_command;
use sprm::constants::USAGE;
use sprm::logging::init_logger;
use sprm::prompt::StdinLineReader;
use sprm::{run, Config};

fn main() {
    setup_panic!();

    let matches = build_command().get_matches();

    if matches.get_flag("help") {
        // Help goes to stderr, matching the original tool
        eprint!("{}", build_command().render_help());
        exit(0);
    }

    let config = match Config::from_matches(&matches) {
        Ok(config) => config,
        Err(err) => {
            // Usage errors are fatal before any file is touched
            eprintln!("{err}");
            eprintln!("{USAGE}");
            exit(1);
        }
    };

    if let Err(err) = init_logger(config.verbosity) {
        eprintln!("Failed to initialize logger: {err}");
        exit(1);
    }

    // Per-file failures are reported as they happen and do not change the
    // exit status; only invocation errors exit non-zero.
    run(&config, &mut StdinLineReader);
}
