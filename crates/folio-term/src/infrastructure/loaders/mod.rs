pub mod file;
pub mod http;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;

use crate::domain::models::DocumentLoaderBox;

pub struct DocumentLoaderManager {}

impl DocumentLoaderManager {
    /// Picks a loader for a document source. `http://` and `https://` sources
    /// are fetched, everything else is read as a local path.
    pub fn get(source: &str, fetch_timeout: Duration) -> Result<DocumentLoaderBox> {
        let source = source.trim();
        if source.is_empty() {
            bail!("No document source configured");
        }

        if source.starts_with("http://") || source.starts_with("https://") {
            return Ok(Box::new(http::HttpLoader::new(source, fetch_timeout)));
        }

        let path = source.strip_prefix("file://").unwrap_or(source);
        return Ok(Box::new(file::FileLoader::new(path)));
    }
}
