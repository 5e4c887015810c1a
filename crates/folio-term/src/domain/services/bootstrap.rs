use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::time;

use crate::domain::models::DocumentLoader;
use crate::domain::models::Event;
use crate::domain::models::Output;
use crate::domain::models::PortfolioDocument;

pub const INITIALIZING_TEXT: &str = "Initializing console system...\n";
pub const PROGRESS_TEXT: &str = "Fetching portfolio";
pub const LOADED_TEXT: &str = "Portfolio loaded successfully ✅\n\n";
pub const FAILED_TEXT: &str =
    "\n⚠️ Failed to load portfolio data. Please check your connection or console logs.\n";

const PROGRESS_DOTS: usize = 3;

fn write(event_tx: &mpsc::UnboundedSender<Event>, text: &str) -> Result<()> {
    event_tx.send(Event::Output(Output::Text(text.to_string())))?;
    Ok(())
}

/// Startup phase: prints status text, fetches the document and reports
/// whether a session can start.
pub struct Bootstrap {
    progress_delay: Duration,
}

impl Bootstrap {
    pub fn new(progress_delay: Duration) -> Bootstrap {
        return Bootstrap { progress_delay };
    }

    async fn progress(&self, event_tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
        write(event_tx, PROGRESS_TEXT)?;
        for _ in 0..PROGRESS_DOTS {
            write(event_tx, ".")?;
            time::sleep(self.progress_delay).await;
        }
        write(event_tx, "\n")?;

        Ok(())
    }

    /// Returns the document on success. On failure the warning has already
    /// been written and `None` is returned; no session may be built.
    pub async fn run(
        &self,
        loader: &dyn DocumentLoader,
        event_tx: &mpsc::UnboundedSender<Event>,
    ) -> Result<Option<PortfolioDocument>> {
        write(event_tx, INITIALIZING_TEXT)?;
        tracing::info!(source = loader.source(), "loading portfolio");

        let (progress, loaded) = tokio::join!(self.progress(event_tx), loader.load());
        progress?;

        return match loaded {
            Ok(document) => {
                write(event_tx, LOADED_TEXT)?;
                event_tx.send(Event::SessionReady)?;
                Ok(Some(document))
            }
            Err(err) => {
                tracing::error!(error = %err, "portfolio load failed");
                write(event_tx, FAILED_TEXT)?;
                event_tx.send(Event::SessionFailed(err.to_string()))?;
                Ok(None)
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::domain::models::LoadError;
    use crate::domain::models::TerminalSession;

    struct StaticLoader {
        result: Result<PortfolioDocument, LoadError>,
    }

    #[async_trait]
    impl DocumentLoader for StaticLoader {
        fn source(&self) -> String {
            "static".to_string()
        }

        async fn load(&self) -> Result<PortfolioDocument, LoadError> {
            self.result.clone()
        }
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<Event>) -> (String, Vec<Event>) {
        let mut session = TerminalSession::default();
        let mut others = vec![];
        while let Ok(event) = rx.try_recv() {
            match event {
                Event::Output(output) => session.apply(&output),
                other => others.push(other),
            }
        }
        (session.rendered_text().to_string(), others)
    }

    #[tokio::test(start_paused = true)]
    async fn it_announces_a_loaded_document() {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let loader = StaticLoader {
            result: Ok(PortfolioDocument::new(json!({"name": "Ali"}))),
        };

        let document = Bootstrap::new(Duration::from_millis(500))
            .run(&loader, &event_tx)
            .await
            .unwrap();

        assert_eq!(document.unwrap().name(), Some("Ali".to_string()));

        let (text, others) = drain(&mut event_rx);
        assert_eq!(
            text,
            "Initializing console system...\nFetching portfolio...\nPortfolio loaded successfully ✅\n\n"
        );
        assert!(matches!(others.as_slice(), [Event::SessionReady]));
    }

    #[tokio::test(start_paused = true)]
    async fn it_warns_and_builds_no_session_on_failure() {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let loader = StaticLoader {
            result: Err(LoadError::Status {
                location: "http://localhost/static/portfolio.json".to_string(),
                status: 404,
            }),
        };

        let document = Bootstrap::new(Duration::from_millis(500))
            .run(&loader, &event_tx)
            .await
            .unwrap();

        assert!(document.is_none());

        let (text, others) = drain(&mut event_rx);
        assert!(text.ends_with(FAILED_TEXT));
        assert!(!text.contains("loaded successfully"));
        match others.as_slice() {
            [Event::SessionFailed(message)] => assert!(message.contains("404")),
            other => panic!("unexpected events {other:?}"),
        }
    }
}
