//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

use scout_config::Config;
use scout_document::load_catalogs;
use scout_index::{Corpus, KindBonus, QueryEngine, ScoreWeights, WeightedScorer};
use scout_session::{FileRecentStore, RecentError};

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (default if no config files were found).
    pub config: Config,
    /// Corpus built on first use.
    corpus: Option<Arc<Corpus>>,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self {
            cwd,
            config,
            corpus: None,
        })
    }

    /// Loads only the current directory, skipping configuration parsing.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
            corpus: None,
        })
    }

    /// Ensures at least one catalog source is configured.
    pub fn require_sources(&self) -> Result<(), ExitCode> {
        if self.config.sources.is_empty() {
            eprintln!("error: no catalog sources configured");
            eprintln!(
                "Run 'scout init' to create a configuration file, then list [catalog] sources."
            );
            return Err(ExitCode::FAILURE);
        }
        Ok(())
    }

    /// Returns the corpus, loading catalogs and building the index on first use.
    pub fn corpus(&mut self) -> Result<Arc<Corpus>, ExitCode> {
        if let Some(corpus) = &self.corpus {
            return Ok(Arc::clone(corpus));
        }

        self.require_sources()?;
        let store = load_catalogs(&self.config.sources).map_err(|e| {
            eprintln!("error: failed to load catalogs: {e}");
            ExitCode::FAILURE
        })?;

        let corpus = Arc::new(Corpus::new(store));
        self.corpus = Some(Arc::clone(&corpus));
        Ok(corpus)
    }

    /// Builds a query engine with configured weights and the given limit override.
    pub fn engine(&mut self, limit: Option<usize>) -> Result<QueryEngine, ExitCode> {
        let corpus = self.corpus()?;
        let scorer = WeightedScorer::new(self.score_weights());
        let limit = limit.or(self.config.search.limit);
        Ok(QueryEngine::with_scorer(corpus, scorer).with_limit(limit))
    }

    /// Score weights from `[scoring]`.
    pub fn score_weights(&self) -> ScoreWeights {
        let scoring = &self.config.scoring;
        let bonus = &scoring.kind_bonus;
        ScoreWeights {
            exact_title: scoring.exact_title,
            title_prefix: scoring.title_prefix,
            title_contains: scoring.title_contains,
            subtitle_contains: scoring.subtitle_contains,
            tag_contains: scoring.tag_contains,
            kind_bonus: KindBonus {
                client: bonus.client,
                project: bonus.project,
                agent: bonus.agent,
                page: bonus.page,
            },
        }
    }

    /// Opens the recent-query store from `[recent] path` or the platform data directory.
    pub fn recent_store(&self) -> Result<FileRecentStore, RecentError> {
        match &self.config.recent.path {
            Some(path) => Ok(FileRecentStore::new(path)),
            None => FileRecentStore::in_data_dir(),
        }
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
