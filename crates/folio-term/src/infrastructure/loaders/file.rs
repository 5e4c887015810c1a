use async_trait::async_trait;
use tokio::fs;

use crate::domain::models::DocumentLoader;
use crate::domain::models::LoadError;
use crate::domain::models::PortfolioDocument;

/// Reads the document from a local JSON file.
pub struct FileLoader {
    path: String,
}

impl FileLoader {
    pub fn new(path: &str) -> FileLoader {
        return FileLoader {
            path: path.to_string(),
        };
    }
}

#[async_trait]
impl DocumentLoader for FileLoader {
    fn source(&self) -> String {
        return self.path.clone();
    }

    async fn load(&self) -> Result<PortfolioDocument, LoadError> {
        let text = fs::read_to_string(&self.path).await.map_err(|err| {
            tracing::error!(error = ?err, path = %self.path, "portfolio file is not readable");
            return LoadError::Io {
                location: self.path.clone(),
                message: err.to_string(),
            };
        })?;

        return PortfolioDocument::from_json(&text).map_err(|err| {
            return LoadError::Parse {
                location: self.path.clone(),
                message: err.to_string(),
            };
        });
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[tokio::test]
    async fn it_reads_a_document_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "Ali", "summary": "Builds things."}}"#).unwrap();

        let loader = FileLoader::new(file.path().to_str().unwrap());
        let document = loader.load().await.unwrap();

        assert_eq!(document.summary(), Some("Builds things.".to_string()));
    }

    #[tokio::test]
    async fn it_fails_on_a_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = FileLoader::new(path.to_str().unwrap())
            .load()
            .await
            .unwrap_err();

        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[tokio::test]
    async fn it_fails_on_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = FileLoader::new(file.path().to_str().unwrap())
            .load()
            .await
            .unwrap_err();

        assert!(matches!(err, LoadError::Parse { .. }));
    }
}
