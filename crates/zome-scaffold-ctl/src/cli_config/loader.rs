//! Config file discovery and loading for `.zome-scaffold.toml`.
//!
//! Checks two locations in precedence order:
//! 1. `./.zome-scaffold.toml` (project-local)
//! 2. `~/.config/zome-scaffold.toml` (user-global)

use std::path::{Path, PathBuf};

use super::CliConfig;

pub(crate) const CONFIG_FILENAME: &str = ".zome-scaffold.toml";
const GLOBAL_CONFIG_DIR: &str = ".config";
const GLOBAL_CONFIG_FILENAME: &str = "zome-scaffold.toml";

/// Load CLI config from the first discovered location, or return defaults.
pub(crate) fn load_cli_config() -> CliConfig {
    let home = home_dir();
    find_config_file(Path::new("."), home.as_deref())
        .map(|path| load_config_file(&path))
        .unwrap_or_default()
}

/// Read one config file. Unreadable or malformed files fall back to defaults.
fn load_config_file(path: &Path) -> CliConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::debug!(?path, "Loaded CLI config");
                config
            }
            Err(e) => {
                tracing::warn!(?path, error = %e, "Failed to parse CLI config, using defaults");
                CliConfig::default()
            }
        },
        Err(e) => {
            tracing::warn!(?path, error = %e, "Failed to read CLI config, using defaults");
            CliConfig::default()
        }
    }
}

fn find_config_file(local_dir: &Path, home: Option<&Path>) -> Option<PathBuf> {
    let local = local_dir.join(CONFIG_FILENAME);
    if local.is_file() {
        return Some(local);
    }

    let global = home?.join(GLOBAL_CONFIG_DIR).join(GLOBAL_CONFIG_FILENAME);
    global.is_file().then_some(global)
}

/// Resolve a leading `~/` against the home directory.
pub(crate) fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_path_absolute_and_relative() {
        assert_eq!(expand_path("/srv/zomes"), PathBuf::from("/srv/zomes"));
        assert_eq!(expand_path("./zomes"), PathBuf::from("./zomes"));
    }

    #[test]
    fn test_local_config_takes_precedence() {
        let local = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        std::fs::write(local.path().join(CONFIG_FILENAME), "").unwrap();
        std::fs::create_dir_all(home.path().join(GLOBAL_CONFIG_DIR)).unwrap();
        std::fs::write(
            home.path().join(GLOBAL_CONFIG_DIR).join(GLOBAL_CONFIG_FILENAME),
            "",
        )
        .unwrap();

        let found = find_config_file(local.path(), Some(home.path())).unwrap();
        assert_eq!(found, local.path().join(CONFIG_FILENAME));
    }

    #[test]
    fn test_falls_back_to_global_config() {
        let local = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        let global_dir = home.path().join(GLOBAL_CONFIG_DIR);
        std::fs::create_dir_all(&global_dir).unwrap();
        std::fs::write(global_dir.join(GLOBAL_CONFIG_FILENAME), "").unwrap();

        let found = find_config_file(local.path(), Some(home.path())).unwrap();
        assert_eq!(found, global_dir.join(GLOBAL_CONFIG_FILENAME));
    }

    #[test]
    fn test_no_config_found() {
        let local = tempfile::tempdir().unwrap();
        assert!(find_config_file(local.path(), None).is_none());
    }

    #[test]
    fn test_malformed_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "required-validations = \"many\"").unwrap();

        let config = load_config_file(&path);
        assert!(config.required_validations.is_none());
        assert!(config.strict_validation);
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "hdi-version = \"0.3.1\"\n").unwrap();

        let config = load_config_file(&path);
        assert_eq!(config.hdi_version.as_deref(), Some("0.3.1"));
    }
}
