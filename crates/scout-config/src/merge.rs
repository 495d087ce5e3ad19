//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`, applying precedence
//! rules and resolving paths against each declaring file.

use std::path::{Path, PathBuf};

use crate::{
    Config, ConfigError, RecentSettings, ScoringSettings, SearchSettings,
    parse::{RawConfig, RawKindBonus, RawRecentSettings, RawScoringSettings},
    resolve::resolve_path,
};

/// A parsed config file with its source path.
#[derive(Debug, Clone)]
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory paths in this config are resolved against.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }
}

/// Merges configuration files given highest precedence first.
///
/// Merge rules:
/// - Scalar settings: first defined value wins
/// - Catalog sources: concatenated closest-first, duplicates dropped
/// - Recent store path: resolved against the file that set it
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let sources = merge_sources(configs)?;
    let search = merge_search_settings(configs);
    let recent = merge_recent_settings(configs)?;
    let scoring = merge_scoring_settings(configs);
    let files = configs.iter().map(|c| c.path.clone()).collect();
    let config_root = configs.first().map(|c| c.dir().to_path_buf());

    tracing::debug!(
        files = configs.len(),
        sources = sources.len(),
        "merged configuration"
    );

    Ok(Config {
        sources,
        search,
        recent,
        scoring,
        files,
        config_root,
    })
}

/// Collects catalog sources from every config, closest config first.
fn merge_sources(configs: &[ParsedConfig]) -> Result<Vec<PathBuf>, ConfigError> {
    let mut sources: Vec<PathBuf> = Vec::new();

    for parsed in configs {
        let Some(raw) = parsed.config.catalog.as_ref().and_then(|c| c.sources.as_ref()) else {
            continue;
        };
        for source in raw {
            let resolved = resolve_path(source, parsed.dir())?;
            if !sources.contains(&resolved) {
                sources.push(resolved);
            }
        }
    }

    Ok(sources)
}

/// Merges search settings, taking the first defined value for each field.
fn merge_search_settings(configs: &[ParsedConfig]) -> SearchSettings {
    let mut result = SearchSettings::default();

    // Lowest precedence first so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref search) = parsed.config.search
            && let Some(limit) = search.limit
        {
            result.limit = Some(limit);
        }
    }

    result
}

/// Merges recent query settings.
fn merge_recent_settings(configs: &[ParsedConfig]) -> Result<RecentSettings, ConfigError> {
    let mut result = RecentSettings::default();

    for parsed in configs.iter().rev() {
        if let Some(ref recent) = parsed.config.recent {
            apply_raw_recent(&mut result, recent, parsed.dir())?;
        }
    }

    Ok(result)
}

/// Applies raw recent settings to result.
fn apply_raw_recent(
    result: &mut RecentSettings,
    raw: &RawRecentSettings,
    config_dir: &Path,
) -> Result<(), ConfigError> {
    if let Some(v) = raw.enabled {
        result.enabled = v;
    }
    if let Some(v) = raw.capacity {
        result.capacity = v;
    }
    if let Some(ref v) = raw.path {
        result.path = Some(resolve_path(v, config_dir)?);
    }
    Ok(())
}

/// Merges scoring weights.
fn merge_scoring_settings(configs: &[ParsedConfig]) -> ScoringSettings {
    let mut result = ScoringSettings::default();

    for parsed in configs.iter().rev() {
        if let Some(ref scoring) = parsed.config.scoring {
            apply_raw_scoring(&mut result, scoring);
        }
    }

    result
}

/// Applies raw scoring weights to result.
fn apply_raw_scoring(result: &mut ScoringSettings, raw: &RawScoringSettings) {
    if let Some(v) = raw.exact_title {
        result.exact_title = v;
    }
    if let Some(v) = raw.title_prefix {
        result.title_prefix = v;
    }
    if let Some(v) = raw.title_contains {
        result.title_contains = v;
    }
    if let Some(v) = raw.subtitle_contains {
        result.subtitle_contains = v;
    }
    if let Some(v) = raw.tag_contains {
        result.tag_contains = v;
    }
    if let Some(ref bonus) = raw.kind_bonus {
        apply_raw_kind_bonus(result, bonus);
    }
}

/// Applies raw kind bonuses to result.
fn apply_raw_kind_bonus(result: &mut ScoringSettings, raw: &RawKindBonus) {
    let bonus = &mut result.kind_bonus;
    if let Some(v) = raw.client {
        bonus.client = v;
    }
    if let Some(v) = raw.project {
        bonus.project = v;
    }
    if let Some(v) = raw.agent {
        bonus.agent = v;
    }
    if let Some(v) = raw.page {
        bonus.page = v;
    }
}
