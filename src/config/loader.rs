use std::fs;
use std::path::{Path, PathBuf};

use super::core::VitalRiskConfig;
use crate::errors::{Result, VitalRiskError};

pub const CONFIG_FILE_NAME: &str = ".vitalrisk.toml";
const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse config from TOML string
pub fn parse_config(contents: &str) -> std::result::Result<VitalRiskConfig, String> {
    toml::from_str::<VitalRiskConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
}

/// Try loading config from a specific path, logging and skipping bad files
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<VitalRiskConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Directory ancestors up to a depth limit, starting with `start` itself
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for the nearest config file
pub fn discover_config(start: PathBuf) -> VitalRiskConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            VitalRiskConfig::default()
        })
}

pub fn load_config() -> VitalRiskConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            VitalRiskConfig::default()
        }
    }
}

/// Load an explicitly requested config file; unlike discovery, failures are errors
pub fn load_config_from(path: &Path) -> Result<VitalRiskConfig> {
    let contents = fs::read_to_string(path).map_err(|e| VitalRiskError::io(path, e))?;
    parse_config(&contents).map_err(VitalRiskError::Config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ValidationPolicy;
    use tempfile::TempDir;

    #[test]
    fn parses_all_sections() {
        let config = parse_config(
            "[output]\ndefault_format = \"json\"\nuse_color = false\n\n[validation]\nstrict = true\n",
        )
        .unwrap();
        assert_eq!(config.default_format(), Some("json"));
        assert_eq!(config.use_color(), Some(false));
        assert_eq!(config.validation_policy(), ValidationPolicy::Strict);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, VitalRiskConfig::default());
        assert_eq!(config.validation_policy(), ValidationPolicy::Warn);
    }

    #[test]
    fn ancestors_are_bounded() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }

    #[test]
    fn discovers_config_in_parent_directory() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("x").join("y");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[validation]\nstrict = true\n",
        )
        .unwrap();

        let config = discover_config(nested);
        assert_eq!(config.validation_policy(), ValidationPolicy::Strict);
    }

    #[test]
    fn invalid_config_falls_back_to_default() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join(CONFIG_FILE_NAME), "[output\n").unwrap();

        let config = discover_config(root.path().to_path_buf());
        assert_eq!(config, VitalRiskConfig::default());
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let root = TempDir::new().unwrap();
        let err = load_config_from(&root.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, VitalRiskError::Io { .. }));
    }
}
