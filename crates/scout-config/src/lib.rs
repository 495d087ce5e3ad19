//! Configuration system for scout.
//!
//! scout uses TOML configuration files named `.scout.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.scout.toml` files found, then loading `~/.scout.toml` as the global config with lowest
//! precedence.

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawCatalog, RawConfig, RawKindBonus, RawRecentSettings, RawScoringSettings,
    RawSearchSettings, parse_config_file, parse_config_str,
};
pub use resolve::resolve_path;
use serde::Serialize;
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Catalog file extensions scout knows how to load.
pub const CATALOG_EXTENSIONS: &[&str] = &["toml", "json"];

/// Top-level merged configuration for scout.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Catalog sources, resolved to absolute paths in precedence order.
    pub sources: Vec<PathBuf>,
    /// Search settings.
    pub search: SearchSettings,
    /// Recent query settings.
    pub recent: RecentSettings,
    /// Scoring weights.
    pub scoring: ScoringSettings,
    /// Config files that contributed, highest precedence first.
    pub files: Vec<PathBuf>,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.scout.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from config file paths given highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let parsed = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings in `.scout.toml` format.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            catalog: SerializableCatalog {
                sources: self
                    .sources
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect(),
            },
            search: &self.search,
            recent: &self.recent,
            scoring: &self.scoring,
        };
        Ok(toml::to_string_pretty(&serializable)?)
    }
}

/// Search settings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchSettings {
    /// Maximum results per query; `None` returns every match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

/// Recent query settings.
#[derive(Debug, Clone, Serialize)]
pub struct RecentSettings {
    /// Whether confirmed queries are recorded.
    pub enabled: bool,
    /// Number of queries kept.
    pub capacity: usize,
    /// Explicit store file; the platform data directory is used otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Default for RecentSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            capacity: 5,
            path: None,
        }
    }
}

/// Points awarded by the relevance scorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoringSettings {
    /// Title equals the query.
    pub exact_title: u32,
    /// Title starts with the query.
    pub title_prefix: u32,
    /// Title contains the query.
    pub title_contains: u32,
    /// Subtitle contains the query.
    pub subtitle_contains: u32,
    /// Per tag containing the query.
    pub tag_contains: u32,
    /// Bonus by document kind.
    pub kind_bonus: KindBonusSettings,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            exact_title: 100,
            title_prefix: 50,
            title_contains: 25,
            subtitle_contains: 15,
            tag_contains: 10,
            kind_bonus: KindBonusSettings::default(),
        }
    }
}

/// Bonus points by document kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindBonusSettings {
    /// Clients.
    pub client: u32,
    /// Projects.
    pub project: u32,
    /// Agents.
    pub agent: u32,
    /// Pages.
    pub page: u32,
}

impl Default for KindBonusSettings {
    fn default() -> Self {
        Self {
            client: 5,
            project: 4,
            agent: 3,
            page: 2,
        }
    }
}

/// TOML layout of the effective settings.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Catalog section.
    catalog: SerializableCatalog,
    /// Search section.
    search: &'a SearchSettings,
    /// Recent section.
    recent: &'a RecentSettings,
    /// Scoring section.
    scoring: &'a ScoringSettings,
}

/// Catalog section with sources rendered as strings.
#[derive(Serialize)]
struct SerializableCatalog {
    /// Resolved source paths.
    sources: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.sources.is_empty());
        assert!(config.files.is_empty());
        assert!(config.config_root.is_none());
        assert_eq!(config.search.limit, None);
        assert!(config.recent.enabled);
        assert_eq!(config.recent.capacity, 5);
        assert_eq!(config.scoring.exact_title, 100);
        assert_eq!(config.scoring.kind_bonus.client, 5);
        assert_eq!(config.scoring.kind_bonus.page, 2);
    }

    #[test]
    fn test_settings_to_toml() {
        let mut config = Config::default();
        config.sources.push(PathBuf::from("/data/catalog.toml"));
        config.search.limit = Some(7);
        let toml = config.settings_to_toml().unwrap();

        assert!(toml.contains("[catalog]"));
        assert!(toml.contains("[search]"));
        assert!(toml.contains("limit = 7"));
        assert!(toml.contains("[recent]"));
        assert!(toml.contains("[scoring]"));
        assert!(toml.contains("[scoring.kind_bonus]"));
        assert!(toml.contains("exact_title = 100"));

        let reparsed = parse_config_str(&toml, Path::new("effective.toml")).unwrap();
        assert_eq!(
            reparsed.catalog.unwrap().sources.unwrap(),
            vec!["/data/catalog.toml"]
        );
        assert_eq!(reparsed.scoring.unwrap().kind_bonus.unwrap().agent, Some(3));
    }

    #[test]
    fn test_settings_to_toml_omits_unlimited() {
        let toml = Config::default().settings_to_toml().unwrap();
        let value: toml::Value = toml::from_str(&toml).unwrap();
        assert!(value.get("search").unwrap().get("limit").is_none());
    }
}
