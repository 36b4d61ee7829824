//! Idea source: where the idea list is loaded from
//!
//! A source is either a local JSON file or an HTTP(S) URL fetched once at
//! startup. Either way the payload must be a JSON array of idea records.

use std::path::PathBuf;
use std::time::Duration;

use ideas_core::prelude::*;
use ideas_core::{parse_idea_list, IdeaRecord};
use url::Url;

/// Location of the idea list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdeaSource {
    /// JSON file on disk
    File(PathBuf),
    /// JSON resource fetched over HTTP(S)
    Url(Url),
}

impl IdeaSource {
    /// Interpret a location string.
    ///
    /// `http://` and `https://` prefixes select a URL; anything else is a path.
    pub fn parse(location: &str) -> Result<Self> {
        let trimmed = location.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            let url = Url::parse(trimmed)
                .map_err(|e| Error::config(format!("Invalid idea source URL {}: {}", trimmed, e)))?;
            Ok(Self::Url(url))
        } else {
            Ok(Self::File(PathBuf::from(trimmed)))
        }
    }

    /// Short label for the header and log lines
    pub fn label(&self) -> String {
        match self {
            IdeaSource::File(path) => path.display().to_string(),
            IdeaSource::Url(url) => url.to_string(),
        }
    }
}

impl std::fmt::Display for IdeaSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Load and validate the idea list from `source`
pub async fn fetch_ideas(source: &IdeaSource, timeout: Duration) -> Result<Vec<IdeaRecord>> {
    let payload = match source {
        IdeaSource::File(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::load_failed(source.label(), e.to_string()))?,
        IdeaSource::Url(url) => fetch_url(url, timeout).await?,
    };

    let ideas = parse_idea_list(&payload)?;
    info!("Loaded {} ideas from {}", ideas.len(), source);
    Ok(ideas)
}

async fn fetch_url(url: &Url, timeout: Duration) -> Result<String> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| Error::load_failed(url.as_str(), e.to_string()))?;

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| Error::load_failed(url.as_str(), e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::SourceStatus {
            status: status.as_u16(),
        });
    }

    response
        .text()
        .await
        .map_err(|e| Error::load_failed(url.as_str(), e.to_string()))
}
