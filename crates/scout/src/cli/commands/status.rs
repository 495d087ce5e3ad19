//! Implementation of `scout status`.

use std::process::ExitCode;

use scout_document::load_catalogs;
use scout_index::Corpus;

use crate::cli::{
    commands::check::print_warnings,
    context::CommandContext,
    output::{dim, subheader, warning},
};

/// Shows configuration files, catalog sources, index statistics, and warnings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config = &ctx.config;

    if config.files.is_empty() {
        println!("{}", dim("No configuration files found."));
        println!();
        println!(
            "Run {} to create a configuration file.",
            subheader("scout init")
        );
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader("Config files:"));
    for path in &config.files {
        println!("   {}", path.display());
    }
    println!();

    println!("{}", subheader("Catalog sources:"));
    if config.sources.is_empty() {
        println!("   {}", dim("(none defined)"));
    }
    for source in &config.sources {
        if source.is_file() {
            println!("   {}", source.display());
        } else {
            println!("   {} {}", source.display(), warning("[missing]"));
        }
    }
    println!();

    print_index_stats(ctx);

    println!("{}", subheader("Recent queries:"));
    let recent = &config.recent;
    if recent.enabled {
        let location = match ctx.recent_store() {
            Ok(store) => store.path().display().to_string(),
            Err(e) => e.to_string(),
        };
        println!("   enabled, capacity {} {}", recent.capacity, dim(&format!("({location})")));
    } else {
        println!("   {}", dim("disabled"));
    }
    println!();

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }
    print_warnings(&warnings);
    ExitCode::FAILURE
}

/// Loads the catalogs and prints document and term counts.
fn print_index_stats(ctx: &CommandContext) {
    let sources: Vec<_> = ctx.config.sources.iter().filter(|p| p.is_file()).collect();
    if sources.is_empty() {
        return;
    }

    println!("{}", subheader("Index:"));
    match load_catalogs(&sources) {
        Ok(store) => {
            let corpus = Corpus::new(store);
            let index = corpus.index();
            println!(
                "   {} documents, {} terms, {} postings",
                corpus.store().len(),
                index.term_count(),
                index.posting_count()
            );
            for (kind, count) in corpus.store().kind_counts() {
                println!("   {}", dim(&format!("{kind}: {count}")));
            }
        }
        Err(e) => println!("   {}", warning(&e.to_string())),
    }
    println!();
}
