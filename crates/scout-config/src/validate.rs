//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::{fmt, path::Path};

use crate::{CATALOG_EXTENSIONS, Config, ScoringSettings};

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// No catalog sources are configured.
    NoSources,
    /// A catalog source does not exist.
    SourceMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// A catalog source has an extension scout cannot load.
    UnsupportedSource {
        /// Offending path.
        path: String,
    },
    /// An exact title match no longer outranks a prefix match.
    ExactTitleNotDominant {
        /// Configured exact-title points.
        exact_title: u32,
        /// Configured title-prefix points.
        title_prefix: u32,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSources => write!(f, "no catalog sources are configured"),
            Self::SourceMissing { path } => write!(f, "catalog source does not exist: {path}"),
            Self::UnsupportedSource { path } => write!(
                f,
                "catalog source has an unsupported extension (expected .toml or .json): {path}"
            ),
            Self::ExactTitleNotDominant {
                exact_title,
                title_prefix,
            } => write!(
                f,
                "scoring.exact_title ({exact_title}) should be greater than \
                 scoring.title_prefix ({title_prefix})"
            ),
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.sources.is_empty() {
        warnings.push(ConfigWarning::NoSources);
    }
    for source in &config.sources {
        warnings.extend(validate_source(source));
    }
    warnings.extend(validate_scoring(&config.scoring));

    warnings
}

/// Checks that a source exists and has a loadable extension.
fn validate_source(path: &Path) -> Option<ConfigWarning> {
    let supported = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CATALOG_EXTENSIONS.contains(&ext));
    if !supported {
        return Some(ConfigWarning::UnsupportedSource {
            path: path.display().to_string(),
        });
    }
    if !path.is_file() {
        return Some(ConfigWarning::SourceMissing {
            path: path.display().to_string(),
        });
    }
    None
}

/// Checks that the weights keep exact title matches on top.
fn validate_scoring(scoring: &ScoringSettings) -> Option<ConfigWarning> {
    (scoring.exact_title <= scoring.title_prefix).then_some(ConfigWarning::ExactTitleNotDominant {
        exact_title: scoring.exact_title,
        title_prefix: scoring.title_prefix,
    })
}
