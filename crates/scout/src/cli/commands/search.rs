//! Implementation of `scout search`.

use std::process::ExitCode;

use scout_index::{MIN_TERM_LENGTH, tokenize};

use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    output::{dim, explain_table, print_search_json, results_table, subheader},
};

/// Runs one query and prints the ranked results.
pub fn run(ctx: &mut CommandContext, cmd: &SearchCommand) -> ExitCode {
    let query = cmd.query_text();
    let engine = match ctx.engine(cmd.limit) {
        Ok(engine) => engine,
        Err(code) => return code,
    };

    let results = engine.run(&query);

    if cmd.json {
        let scorer = cmd.explain.then_some(engine.scorer());
        return print_search_json(&query, &results, scorer);
    }

    if results.is_empty() {
        println!("{}", dim(&format!("No results for \"{query}\"")));
        if tokenize(&query).is_empty() {
            println!(
                "{}",
                dim(&format!(
                    "Query words need at least {MIN_TERM_LENGTH} characters."
                ))
            );
        }
        return ExitCode::SUCCESS;
    }

    println!("{}", results_table(&query, &results));

    if cmd.explain {
        println!();
        println!("{}", subheader("Score breakdown:"));
        println!("{}", explain_table(&query, &results, engine.scorer()));
    }

    ExitCode::SUCCESS
}
