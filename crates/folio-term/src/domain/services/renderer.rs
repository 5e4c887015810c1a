#[cfg(test)]
#[path = "renderer_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::time;

use crate::domain::models::Event;
use crate::domain::models::Output;
use crate::domain::models::RenderJob;
use crate::domain::models::Segment;

/// The single animation worker.
///
/// Jobs are taken off the queue one at a time and typed out completely before
/// the next one starts, so output of back-to-back submissions never
/// interleaves. Within a job every character is its own `Output::Char` event
/// followed by the typing delay.
pub struct Renderer {
    typing_delay: Duration,
}

impl Renderer {
    pub fn new(typing_delay: Duration) -> Renderer {
        Renderer { typing_delay }
    }

    pub async fn start(
        &self,
        jobs: &mut mpsc::UnboundedReceiver<RenderJob>,
        event_tx: &mpsc::UnboundedSender<Event>,
    ) -> Result<()> {
        while let Some(job) = jobs.recv().await {
            self.animate(&job, event_tx).await?;
            event_tx.send(Event::RenderFinished)?;
        }

        tracing::debug!("render queue closed");
        Ok(())
    }

    pub async fn animate(
        &self,
        job: &RenderJob,
        event_tx: &mpsc::UnboundedSender<Event>,
    ) -> Result<()> {
        for segment in &job.segments {
            match segment {
                Segment::Line(text) => self.type_line(text, event_tx).await?,
                Segment::Clear => event_tx.send(Event::Output(Output::Clear))?,
            }
        }

        Ok(())
    }

    async fn type_line(&self, text: &str, event_tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
        for c in text.chars() {
            event_tx.send(Event::Output(Output::Char(c)))?;
            if !self.typing_delay.is_zero() {
                time::sleep(self.typing_delay).await;
            }
        }

        event_tx.send(Event::Output(Output::LineBreak))?;
        Ok(())
    }
}
