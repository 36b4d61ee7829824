//! Command-line arguments and settings resolution

use std::path::PathBuf;

use clap::Parser;
use ideas_app::config::{default_config_path, load_settings};
use ideas_app::{FileStore, KeyValueStore, MemoryStore, Settings};
use ideas_core::prelude::*;

/// Startup Ideas - A random startup-idea generator for the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "ideas")]
#[command(about = "A random startup-idea generator with persistent favorites", long_about = None)]
pub struct Args {
    /// Idea list to load: a JSON file path or an http(s) URL
    #[arg(value_name = "SOURCE")]
    pub source: Option<String>,

    /// Path to config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory favorites are persisted in
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Directory the favorites export is written to
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Keep favorites in memory for this session only
    #[arg(long)]
    pub ephemeral: bool,

    /// Write a default config.toml and exit
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// Config file in use: `--config` or the platform default
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(default_config_path)
    }

    /// Apply command-line overrides on top of file settings
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(ref source) = self.source {
            settings.source.location = source.clone();
        }
        if let Some(ref dir) = self.data_dir {
            settings.storage.data_dir = Some(dir.clone());
        }
        if let Some(ref dir) = self.export_dir {
            settings.export.directory = dir.clone();
        }
        if self.ephemeral {
            settings.storage.persist = false;
        }
    }
}

/// Load config.toml and layer the command-line overrides on top
pub fn resolve_settings(args: &Args) -> Settings {
    let mut settings = load_settings(&args.config_path());
    args.apply_overrides(&mut settings);
    settings
}

/// Storage backend for favorites
pub fn open_storage(settings: &Settings) -> Box<dyn KeyValueStore> {
    if settings.storage.persist {
        let dir = settings.data_dir();
        debug!("Persisting favorites under {}", dir.display());
        Box::new(FileStore::new(dir))
    } else {
        info!("Ephemeral mode: favorites are kept in memory");
        Box::new(MemoryStore::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_flags() {
        let args = Args::parse_from([
            "ideas",
            "https://example.com/ideas.json",
            "--config",
            "/tmp/c.toml",
            "--data-dir",
            "/tmp/data",
            "--export-dir",
            "/tmp/out",
            "--ephemeral",
        ]);

        assert_eq!(args.source.as_deref(), Some("https://example.com/ideas.json"));
        assert_eq!(args.config_path(), PathBuf::from("/tmp/c.toml"));
        assert!(args.ephemeral);
        assert!(!args.init_config);
    }

    #[test]
    fn test_overrides_replace_file_settings() {
        let args = Args::parse_from(["ideas", "mine.json", "--export-dir", "exports", "--ephemeral"]);
        let mut settings = Settings::default();

        args.apply_overrides(&mut settings);

        assert_eq!(settings.source.location, "mine.json");
        assert_eq!(settings.export.directory, PathBuf::from("exports"));
        assert!(!settings.storage.persist);
        assert!(settings.storage.data_dir.is_none());
    }

    #[test]
    fn test_no_flags_keep_settings() {
        let args = Args::parse_from(["ideas"]);
        let mut settings = Settings::default();

        args.apply_overrides(&mut settings);

        assert_eq!(settings, Settings::default());
        assert_eq!(args.config_path(), default_config_path());
    }
}
