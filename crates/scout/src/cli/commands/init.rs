//! Implementation of `scout init`.

use std::{fs, path::PathBuf, process::ExitCode};

use scout_config::{CONFIG_FILENAME, global_config_path, global_template, local_template};
use scout_highlight::{Highlighter, dim, indent_content, subheader};

use crate::cli::{args::InitCommand, context::CommandContext};

/// Writes a commented `.scout.toml` template, locally or in the home directory.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let Some((config_path, global)) = target_path(ctx, cmd.global) else {
        eprintln!("error: could not determine home directory");
        return ExitCode::FAILURE;
    };

    if config_path.exists() && !cmd.force {
        eprintln!(
            "error: {} already exists (use --force to overwrite)",
            config_path.display()
        );
        return ExitCode::FAILURE;
    }

    let template = if global {
        global_template()
    } else {
        local_template()
    };
    if let Err(e) = fs::write(&config_path, &template) {
        eprintln!("error: failed to write {}: {e}", config_path.display());
        return ExitCode::FAILURE;
    }

    println!("Created {}", config_path.display());
    println!();
    println!("{}", subheader("Configuration written:"));
    println!(
        "{}",
        indent_content(&Highlighter::new().highlight_toml(&template))
    );
    if !global {
        println!(
            "{}",
            dim("Point [catalog] sources at your TOML or JSON catalogs, then run `scout check`.")
        );
    }

    ExitCode::SUCCESS
}

/// Resolves where to write, and whether that location is the global config.
///
/// Running in the home directory always targets the global file.
fn target_path(ctx: &CommandContext, global: bool) -> Option<(PathBuf, bool)> {
    let global_path = global_config_path();
    let in_home = global_path
        .as_deref()
        .and_then(|p| p.parent())
        .is_some_and(|home| home == ctx.cwd);

    if global || in_home {
        global_path.map(|path| (path, true))
    } else {
        Some((ctx.cwd.join(CONFIG_FILENAME), false))
    }
}
