//! Startup Ideas - A random startup-idea generator for the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use clap::Parser;
use ideas_app::config::init_config_file;
use ideas_core::logging::{get_log_directory, LOG_FILE_PREFIX};
use ideas_core::prelude::*;
use startup_ideas::Args;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.init_config {
        let path = args.config_path();
        if init_config_file(&path)? {
            eprintln!("✅ Wrote default config to {}", path.display());
        } else {
            eprintln!("Config already exists at {}", path.display());
        }
        return Ok(());
    }

    let result = startup_ideas::run(args).await;
    if result.is_err() {
        eprintln!(
            "See the latest {}.* file in {} for details",
            LOG_FILE_PREFIX,
            get_log_directory().display()
        );
    }
    result
}
