//! Implementation of `scout recent`.

use std::process::ExitCode;

use scout_session::{RECENT_NAMESPACE, RecentQueries, RecentStore};

use crate::cli::{
    args::RecentCommand,
    context::CommandContext,
    output::{dim, print_json, subheader},
};

/// Lists or clears recently confirmed queries.
pub fn run(ctx: &CommandContext, cmd: &RecentCommand) -> ExitCode {
    let mut store = match ctx.recent_store() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cmd.clear {
        if let Err(e) = store.save(RECENT_NAMESPACE, &[]) {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
        println!("Cleared recent queries.");
        return ExitCode::SUCCESS;
    }

    let entries = match store.load(RECENT_NAMESPACE) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let recent = RecentQueries::from_entries(entries, ctx.config.recent.capacity);

    if cmd.json {
        return print_json(&recent.entries());
    }

    if recent.is_empty() {
        println!("{}", dim("No recent queries."));
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader("Recent queries:"));
    for (i, query) in recent.entries().iter().enumerate() {
        println!("  {}. {query}", i + 1);
    }
    ExitCode::SUCCESS
}
