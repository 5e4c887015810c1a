use async_trait::async_trait;
use thiserror::Error;

use super::PortfolioDocument;

/// Why the portfolio document could not be loaded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Failed to fetch portfolio from {location}: {message}")]
    Transport { location: String, message: String },
    #[error("Failed to load portfolio: HTTP {status} from {location}")]
    Status { location: String, status: u16 },
    #[error("Failed to parse portfolio from {location}: {message}")]
    Parse { location: String, message: String },
    #[error("Failed to read portfolio file {location}: {message}")]
    Io { location: String, message: String },
}

#[async_trait]
pub trait DocumentLoader: Send + Sync {
    /// Where the document is read from, for status text and logs.
    fn source(&self) -> String;
    async fn load(&self) -> Result<PortfolioDocument, LoadError>;
}

pub type DocumentLoaderBox = Box<dyn DocumentLoader>;
