use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;

use super::Bootstrap;
use super::Interpreter;
use super::Renderer;
use crate::domain::models::Action;
use crate::domain::models::DocumentLoaderBox;
use crate::domain::models::Event;
use crate::domain::models::RenderJob;

/// Timing of everything the console animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub typing_delay: Duration,
    pub progress_delay: Duration,
}

impl Default for Pacing {
    fn default() -> Pacing {
        Pacing {
            typing_delay: Duration::from_millis(5),
            progress_delay: Duration::from_millis(500),
        }
    }
}

pub struct ActionsService {}

impl ActionsService {
    /// Loads the document, then turns every action into a render job for the
    /// renderer queue. Without a document, actions are drained and ignored.
    pub async fn start(
        loader: DocumentLoaderBox,
        pacing: Pacing,
        event_tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let bootstrap = Bootstrap::new(pacing.progress_delay);
        let Some(document) = bootstrap.run(loader.as_ref(), &event_tx).await? else {
            while let Some(action) = rx.recv().await {
                tracing::debug!(action = ?action, "no session, action ignored");
            }
            return Ok(());
        };

        let interpreter = Interpreter::new(document);
        let (job_tx, mut job_rx) = mpsc::unbounded_channel::<RenderJob>();

        let renderer_event_tx = event_tx.clone();
        tokio::spawn(async move {
            let renderer = Renderer::new(pacing.typing_delay);
            if let Err(err) = renderer.start(&mut job_rx, &renderer_event_tx).await {
                tracing::error!(error = ?err, "renderer stopped");
            }
        });

        while let Some(action) = rx.recv().await {
            let job = match action {
                Action::Welcome => interpreter.welcome(),
                Action::Submit(line) => interpreter.submit(&line),
            };
            job_tx.send(job)?;
        }

        Ok(())
    }
}
