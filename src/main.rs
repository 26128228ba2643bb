use std::process;

use clap::Parser;

use bst_explorer::cli::logging::setup_logging;
use bst_explorer::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = execute(&cli) {
        tracing::error!(error = %e, "session aborted");
        eprintln!("Error: {e}");
        process::exit(e.exit_code());
    }
}
