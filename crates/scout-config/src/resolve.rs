//! Path resolution for catalog sources and the recent-query store.
//!
//! Resolves relative and tilde-prefixed paths against the directory of the config file
//! that declared them. Paths are not required to exist; missing files surface as
//! validation warnings instead.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a configured path to an absolute path.
///
/// - `~` and `~/...` expand to the home directory
/// - relative paths are joined onto `config_dir`
/// - absolute paths are returned unchanged
pub fn resolve_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;
    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(config_dir.join(expanded))
    }
}

/// Expands a tilde prefix to the home directory.
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        return Ok(home_dir()?.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_path() {
        let resolved = resolve_path("catalog.toml", Path::new("/project")).unwrap();
        assert_eq!(resolved, PathBuf::from("/project/catalog.toml"));
    }

    #[test]
    fn test_resolve_parent_relative_path() {
        let resolved = resolve_path("../shared/pages.json", Path::new("/project")).unwrap();
        assert_eq!(resolved, PathBuf::from("/project/../shared/pages.json"));
    }

    #[test]
    fn test_resolve_absolute_path() {
        let resolved = resolve_path("/data/catalog.toml", Path::new("/other")).unwrap();
        assert_eq!(resolved, PathBuf::from("/data/catalog.toml"));
    }

    #[test]
    fn test_resolve_tilde_path() {
        let home = home_dir().unwrap();
        assert_eq!(resolve_path("~", Path::new("/x")).unwrap(), home);
        assert_eq!(
            resolve_path("~/catalogs/main.toml", Path::new("/x")).unwrap(),
            home.join("catalogs/main.toml")
        );
    }

    #[test]
    fn test_tilde_in_middle_is_literal() {
        let resolved = resolve_path("a~/b.toml", Path::new("/project")).unwrap();
        assert_eq!(resolved, PathBuf::from("/project/a~/b.toml"));
    }
}
