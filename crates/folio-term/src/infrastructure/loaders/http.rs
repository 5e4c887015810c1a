#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::models::DocumentLoader;
use crate::domain::models::LoadError;
use crate::domain::models::PortfolioDocument;

/// Fetches the document with a single GET.
pub struct HttpLoader {
    url: String,
    timeout: Duration,
}

impl HttpLoader {
    pub fn new(url: &str, timeout: Duration) -> HttpLoader {
        return HttpLoader {
            url: url.to_string(),
            timeout,
        };
    }

    fn transport_error(&self, err: reqwest::Error) -> LoadError {
        tracing::error!(error = ?err, url = %self.url, "portfolio server is not reachable");
        return LoadError::Transport {
            location: self.url.clone(),
            message: err.to_string(),
        };
    }
}

#[async_trait]
impl DocumentLoader for HttpLoader {
    fn source(&self) -> String {
        return self.url.clone();
    }

    async fn load(&self) -> Result<PortfolioDocument, LoadError> {
        let res = reqwest::Client::new()
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|err| return self.transport_error(err))?;

        let status = res.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), url = %self.url, "portfolio request failed");
            return Err(LoadError::Status {
                location: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = res
            .text()
            .await
            .map_err(|err| return self.transport_error(err))?;

        return PortfolioDocument::from_json(&body).map_err(|err| {
            return LoadError::Parse {
                location: self.url.clone(),
                message: err.to_string(),
            };
        });
    }
}
