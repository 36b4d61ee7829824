//! Settings parser for config.toml

use super::types::Settings;
use ideas_core::logging::APP_DIR_NAME;
use ideas_core::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.toml";

// ─────────────────────────────────────────────────────────────────────────────
// Paths
// ─────────────────────────────────────────────────────────────────────────────

/// Default location of config.toml: `<config_dir>/startup-ideas/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(CONFIG_FILENAME)
}

/// Default directory for persisted state: `<data_local_dir>/startup-ideas`
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

impl Settings {
    /// Directory persisted favorites are stored in
    pub fn data_dir(&self) -> PathBuf {
        match self.storage.data_dir {
            Some(ref dir) if !dir.as_os_str().is_empty() => dir.clone(),
            _ => default_data_dir(),
        }
    }

    /// Timeout for URL sources
    pub fn source_timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout_secs.max(1))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from `config_path`
///
/// Returns default settings if file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config.toml if none exists.
///
/// Returns `true` when a file was created.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    std::fs::write(config_path, generate_default_config())
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;

    info!("Created default config at {:?}", config_path);
    Ok(true)
}

fn generate_default_config() -> String {
    r#"# Startup Ideas Configuration

[source]
location = "ideas.json"   # File path or http(s) URL of the idea list
timeout_secs = 10         # Timeout for URL sources

[storage]
# data_dir = "/path/to/state"   # Defaults to the platform data directory
persist = true            # false keeps favorites in memory for this session only

[export]
directory = "."           # Where startup-ideas-favorites.json is written
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_missing_file() {
        let temp = tempdir().unwrap();
        let settings = load_settings(&temp.path().join(CONFIG_FILENAME));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            r#"
[source]
location = "my-ideas.json"

[export]
directory = "out"
"#,
        )
        .unwrap();

        let settings = load_settings(&path);

        assert_eq!(settings.source.location, "my-ideas.json");
        assert_eq!(settings.export.directory, PathBuf::from("out"));
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "this is [not valid toml").unwrap();

        let settings = load_settings(&path);

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_init_config_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join(CONFIG_FILENAME);

        assert!(init_config_file(&path).unwrap());
        assert!(path.exists());
        assert!(!init_config_file(&path).unwrap());
    }

    #[test]
    fn test_generate_default_config_is_valid_toml() {
        let settings: Settings = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_data_dir_override() {
        let mut settings = Settings::default();
        settings.storage.data_dir = Some(PathBuf::from("/tmp/state"));
        assert_eq!(settings.data_dir(), PathBuf::from("/tmp/state"));
    }

    #[test]
    fn test_empty_data_dir_uses_default() {
        let mut settings = Settings::default();
        settings.storage.data_dir = Some(PathBuf::new());
        assert_eq!(settings.data_dir(), default_data_dir());
    }

    #[test]
    fn test_source_timeout_has_floor() {
        let mut settings = Settings::default();
        settings.source.timeout_secs = 0;
        assert_eq!(settings.source_timeout(), Duration::from_secs(1));
    }
}
