//! Implementation of `scout check`.

use std::process::ExitCode;

use scout_config::ConfigWarning;
use scout_document::load_catalogs;

use crate::cli::{
    context::CommandContext,
    output::{dim, subheader, success, warning},
};

/// Validates configuration and catalogs, exiting non-zero on any problem.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let warnings = ctx.config.validate();
    let mut failed = !warnings.is_empty();

    if !warnings.is_empty() {
        print_warnings(&warnings);
    }

    let readable: Vec<_> = ctx.config.sources.iter().filter(|p| p.is_file()).collect();
    if !readable.is_empty() {
        match load_catalogs(&readable) {
            Ok(store) => println!(
                "{}",
                success(&format!(
                    "Loaded {} documents from {} catalogs.",
                    store.len(),
                    readable.len()
                ))
            ),
            Err(e) => {
                eprintln!("error: {e}");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        println!("No issues found.");
        ExitCode::SUCCESS
    }
}

/// Prints warnings followed by hints for resolving them.
pub fn print_warnings(warnings: &[ConfigWarning]) {
    println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in warnings {
        println!("   {}", warning(&w.to_string()));
    }
    println!();

    let mut hints: Vec<&str> = warnings.iter().map(hint).collect();
    hints.sort_unstable();
    hints.dedup();
    for h in hints {
        println!("{}", dim(&format!("Hint: {h}")));
    }
}

/// Hint for resolving a warning.
fn hint(warning: &ConfigWarning) -> &'static str {
    match warning {
        ConfigWarning::NoSources => "add `sources` under [catalog] in .scout.toml",
        ConfigWarning::SourceMissing { .. } => {
            "create the catalog file or fix its path (relative to the config file)"
        }
        ConfigWarning::UnsupportedSource { .. } => "catalogs must be .toml or .json files",
        ConfigWarning::ExactTitleNotDominant { .. } => {
            "raise scoring.exact_title above scoring.title_prefix"
        }
    }
}
