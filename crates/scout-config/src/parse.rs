//! Configuration file parsing.
//!
//! Parses individual `.scout.toml` files into `RawConfig` structures that keep every field
//! optional until merging.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here and ignore parent and global configs.
    pub root: Option<bool>,
    /// Catalog section.
    pub catalog: Option<RawCatalog>,
    /// Search section.
    pub search: Option<RawSearchSettings>,
    /// Recent queries section.
    pub recent: Option<RawRecentSettings>,
    /// Scoring weights section.
    pub scoring: Option<RawScoringSettings>,
}

/// Raw `[catalog]` section.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCatalog {
    /// Catalog files, relative to the declaring config. A single string or an array.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub sources: Option<Vec<String>>,
}

/// Raw `[search]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSearchSettings {
    /// Maximum results per query.
    pub limit: Option<usize>,
}

/// Raw `[recent]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRecentSettings {
    /// Whether confirmed queries are recorded.
    pub enabled: Option<bool>,
    /// Number of queries kept.
    pub capacity: Option<usize>,
    /// Explicit store file.
    pub path: Option<String>,
}

/// Raw `[scoring]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawScoringSettings {
    /// Points when the title equals the query.
    pub exact_title: Option<u32>,
    /// Points when the title starts with the query.
    pub title_prefix: Option<u32>,
    /// Points when the title contains the query.
    pub title_contains: Option<u32>,
    /// Points when the subtitle contains the query.
    pub subtitle_contains: Option<u32>,
    /// Points per tag containing the query.
    pub tag_contains: Option<u32>,
    /// Per-kind bonus.
    pub kind_bonus: Option<RawKindBonus>,
}

/// Raw `[scoring.kind_bonus]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawKindBonus {
    /// Bonus for clients.
    pub client: Option<u32>,
    /// Bonus for projects.
    pub project: Option<u32>,
    /// Bonus for agents.
    pub agent: Option<u32>,
    /// Bonus for pages.
    pub page: Option<u32>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string. `path` is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context.
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Checks if a config file has `root = true` set. Unreadable files are not roots.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config_str("", Path::new("test.toml")).unwrap();
        assert!(config.root.is_none());
        assert!(config.catalog.is_none());
        assert!(config.search.is_none());
        assert!(config.recent.is_none());
        assert!(config.scoring.is_none());
    }

    #[test]
    fn test_parse_single_source() {
        let config = parse_config("[catalog]\nsources = \"catalog.toml\"\n").unwrap();
        assert_eq!(
            config.catalog.unwrap().sources.unwrap(),
            vec!["catalog.toml"]
        );
    }

    #[test]
    fn test_parse_source_list() {
        let config = parse_config(
            r#"
[catalog]
sources = ["clients.toml", "~/shared/pages.json"]
"#,
        )
        .unwrap();
        assert_eq!(
            config.catalog.unwrap().sources.unwrap(),
            vec!["clients.toml", "~/shared/pages.json"]
        );
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r#"
root = true

[search]
limit = 8

[recent]
enabled = false
capacity = 3
path = "recent.json"

[scoring]
exact_title = 200
tag_contains = 5

[scoring.kind_bonus]
agent = 9
"#,
        )
        .unwrap();

        assert_eq!(config.root, Some(true));
        assert_eq!(config.search.unwrap().limit, Some(8));

        let recent = config.recent.unwrap();
        assert_eq!(recent.enabled, Some(false));
        assert_eq!(recent.capacity, Some(3));
        assert_eq!(recent.path.as_deref(), Some("recent.json"));

        let scoring = config.scoring.unwrap();
        assert_eq!(scoring.exact_title, Some(200));
        assert_eq!(scoring.title_prefix, None);
        assert_eq!(scoring.tag_contains, Some(5));
        let bonus = scoring.kind_bonus.unwrap();
        assert_eq!(bonus.agent, Some(9));
        assert_eq!(bonus.client, None);
    }

    #[test]
    fn test_parse_invalid_toml_reports_path() {
        let err = parse_config_str("[search\nlimit = 1", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_parse_wrong_type() {
        assert!(parse_config("[search]\nlimit = \"ten\"\n").is_err());
    }
}
