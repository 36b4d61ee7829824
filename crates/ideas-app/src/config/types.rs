//! Configuration types for Startup Ideas
//!
//! Defines:
//! - `Settings` - Global application settings
//! - Per-section settings structs

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub source: SourceSettings,

    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub export: ExportSettings,
}

/// Where the idea list comes from
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SourceSettings {
    /// File path or http(s) URL of the idea list
    #[serde(default = "default_location")]
    pub location: String,

    /// Timeout for fetching a URL source, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            location: default_location(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_location() -> String {
    "ideas.json".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Favorites persistence
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StorageSettings {
    /// Directory holding persisted state; `None` uses the platform data dir
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// When false, favorites only live for the current session
    #[serde(default = "default_true")]
    pub persist: bool,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: None,
            persist: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Favorites export
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExportSettings {
    /// Directory `startup-ideas-favorites.json` is written to
    #[serde(default = "default_export_dir")]
    pub directory: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            directory: default_export_dir(),
        }
    }
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}
