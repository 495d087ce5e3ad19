//! Command implementations and dispatch.

pub mod check;
pub mod config;
pub mod init;
pub mod recent;
pub mod search;
pub mod session;
pub mod status;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &mut CommandContext) -> ExitCode {
    match command {
        Commands::Search(cmd) => search::run(ctx, &cmd),
        Commands::Session(cmd) => session::run(ctx, &cmd),
        Commands::Recent(cmd) => recent::run(ctx, &cmd),
        Commands::Status => status::run(ctx),
        Commands::Check => check::run(ctx),
        Commands::Config => config::run(ctx),
        Commands::Init(cmd) => init::run(ctx, &cmd),
    }
}
