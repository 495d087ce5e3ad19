//! scout: command-palette search for a consulting admin app.
//!
//! scout indexes clients, projects, agents, and pages from catalog files and ranks them
//! against free-text queries. The `scout` binary exposes one-shot search, an interactive
//! palette session over stdin, and tooling for configuration.

pub mod cli;
