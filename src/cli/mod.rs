//! CLI layer: argument parsing, the interactive menu, and logging setup

pub mod args;
pub mod error;
pub mod exitcode;
pub mod input;
pub mod logging;
pub mod menu;

use std::io::{self, BufRead, Write};

pub use args::Cli;
pub use error::{CliError, CliResult};
pub use input::{Token, Tokens};
pub use menu::{Command, Session};

/// Runs a whole session against stdin and stdout.
pub fn execute(cli: &Cli) -> CliResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    execute_with(cli, stdin.lock(), &mut stdout.lock())
}

/// Runs a whole session: the greeting, seeding unless `--keys` already did it,
/// then the menu until Exit or the end of `input`.
pub fn execute_with<R: BufRead, W: Write>(cli: &Cli, input: R, out: &mut W) -> CliResult<()> {
    let mut session = Session::new(cli.seed_tree(), cli.limits(), cli.sentinel);
    let mut tokens = Tokens::new(input);

    session.banner(out)?;
    if cli.keys.is_none() {
        session.seed(&mut tokens, out)?;
    } else {
        tracing::info!(keys = session.tree().len(), "seeded from arguments");
    }
    session.run(&mut tokens, out)
}
