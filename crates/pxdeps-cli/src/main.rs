use pxdeps_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Fall back to stderr so an unwritable state dir never blocks the CLI.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = CliCommand::run_from_args() {
        // The reader went away; nothing left to report.
        if cli::is_broken_pipe(&err) {
            return;
        }
        eprintln!("pxdeps error: {:#}", err);
        std::process::exit(1);
    }
}
