//! Favorites export ("download")

use std::path::{Path, PathBuf};

use ideas_core::prelude::*;
use ideas_core::{to_pretty_json, IdeaRecord};

/// File name of the exported favorites
pub const EXPORT_FILENAME: &str = "startup-ideas-favorites.json";

/// Path the export is written to inside `directory`
pub fn export_path(directory: &Path) -> PathBuf {
    directory.join(EXPORT_FILENAME)
}

/// Write `favorites` as indented JSON into `directory`.
///
/// An empty list still produces a file containing `[]`. Returns the path
/// that was written.
pub fn write_favorites(directory: &Path, favorites: &[IdeaRecord]) -> Result<PathBuf> {
    let path = export_path(directory);
    let json = to_pretty_json(favorites)?;

    std::fs::create_dir_all(directory).map_err(|e| Error::export(&path, e.to_string()))?;
    std::fs::write(&path, json).map_err(|e| Error::export(&path, e.to_string()))?;

    info!("Exported {} favorites to {:?}", favorites.len(), path);
    Ok(path)
}
