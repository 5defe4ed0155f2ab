use owui_urls_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; an unwritable state dir is not fatal.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = Cli::run_from_args() {
        eprintln!("owui-urls error: {:#}", err);
        std::process::exit(1);
    }
}
