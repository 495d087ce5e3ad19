//! Command-line interface for scout.

use std::process::ExitCode;

use clap::Parser;
use scout::cli::{self, args::Cli, context::CommandContext, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = if cli.command.needs_config() {
        CommandContext::load()
    } else {
        CommandContext::load_cwd_only()
    };
    match ctx {
        Ok(mut ctx) => cli::commands::run(cli.command, &mut ctx),
        Err(code) => code,
    }
}
