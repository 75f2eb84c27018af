use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::logging;

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        json,
        verbose,
        config_dir,
        command,
    } = cli;

    logging::init(verbose);
    let ctx = AppContext::bootstrap(config_dir, json);

    match command.unwrap_or(Command::Snippets) {
        Command::Snippets => commands::snippets::run(&ctx),
        Command::Profile(args) => commands::profile::run(&ctx, args),
    }
}
