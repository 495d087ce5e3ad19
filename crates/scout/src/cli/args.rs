//! Clap argument definitions for the `scout` CLI.

use clap::{Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "scout")]
#[command(about = "Command-palette search over clients, projects, agents, and pages")]
pub struct Cli {
    /// Log verbosity (-v for debug, -vv for trace); SCOUT_LOG overrides
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for `scout search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Query words, joined with single spaces
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Maximum results [default: from config, unlimited]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Show how each result's score was computed
    #[arg(long)]
    pub explain: bool,
}

impl SearchCommand {
    /// The raw query text.
    pub fn query_text(&self) -> String {
        self.query.join(" ")
    }
}

/// Arguments for `scout session`.
#[derive(Args, Debug, Clone)]
pub struct SessionCommand {
    /// Emit one JSON object per line instead of text
    #[arg(long)]
    pub json: bool,

    /// Do not record or show recent queries
    #[arg(long)]
    pub no_recent: bool,
}

/// Arguments for `scout recent`.
#[derive(Args, Debug, Clone)]
pub struct RecentCommand {
    /// Remove all recorded queries
    #[arg(long)]
    pub clear: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `scout init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.scout.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `scout` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run a one-shot ranked search
    #[command(after_help = "\
MATCHING:
  Query words shorter than 3 characters are ignored.
  A document is a candidate when any query word appears inside one of its words.
  Candidates are ranked by how the whole query matches title, subtitle, and tags.

EXAMPLES:
  scout search lead scorer
  scout search acme -n 3
  scout search 'lead' --explain
  scout search onboarding --json")]
    Search(SearchCommand),

    /// Drive an interactive palette over stdin
    #[command(after_help = "\
INPUT LINES:
  <text>      Set the query
  :next       Highlight the next result (wraps)
  :prev       Highlight the previous result (wraps)
  :confirm    Open the highlighted result
  :pick N     Open result N (1-based)
  :open       Reopen the palette
  :close      Close the palette
  :quit       Exit
  (empty)     Clear the query")]
    Session(SessionCommand),

    /// List or clear recently confirmed queries
    Recent(RecentCommand),

    /// Show configuration, catalogs, and index statistics
    Status,

    /// Validate configuration and catalogs
    Check,

    /// Print effective configuration settings
    Config,

    /// Initialize scout configuration in the current directory
    Init(InitCommand),
}

impl Commands {
    /// Whether the command reads `.scout.toml` before running.
    ///
    /// `init` must work even when an existing config file is invalid.
    pub fn needs_config(&self) -> bool {
        !matches!(self, Self::Init(_))
    }
}
