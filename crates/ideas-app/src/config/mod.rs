//! Configuration file parsing for Startup Ideas
//!
//! Supports `<config_dir>/startup-ideas/config.toml` (or an explicit path)
//! with `[source]`, `[storage]` and `[export]` sections.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, default_data_dir, init_config_file, load_settings,
};
pub use types::*;
