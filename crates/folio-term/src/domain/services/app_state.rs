#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;
use tui_textarea::TextArea;

use super::Scroll;
use super::WrappedLines;
use crate::domain::models::Action;
use crate::domain::models::Output;
use crate::domain::models::TerminalSession;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
    Failed(String),
}

pub struct AppState<'a> {
    pub input: TextArea<'a>,
    pub input_focused: bool,
    pub last_known_height: usize,
    pub last_known_width: usize,
    pub output: WrappedLines,
    pub phase: Phase,
    pub scroll: Scroll,
    pub session: TerminalSession,
}

impl<'a> Default for AppState<'a> {
    fn default() -> AppState<'a> {
        return AppState::new();
    }
}

impl<'a> AppState<'a> {
    pub fn new() -> AppState<'a> {
        return AppState {
            input: TextArea::default(),
            input_focused: false,
            last_known_height: 0,
            last_known_width: 0,
            output: WrappedLines::default(),
            phase: Phase::Loading,
            scroll: Scroll::default(),
            session: TerminalSession::default(),
        };
    }

    pub fn handle_output(&mut self, output: &Output) {
        self.session.apply(output);
        match output {
            Output::Text(text) => self.output.push_str(text),
            Output::Char(c) => self.output.push_char(*c),
            Output::LineBreak => self.output.push_char('\n'),
            Output::Clear => self.output.clear(),
        }
        self.sync_dependants();
        self.scroll.last();
    }

    /// The document is in: start the welcome message and hand focus to the input.
    pub fn handle_session_ready(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        self.phase = Phase::Ready;
        self.session.job_queued();
        tx.send(Action::Welcome)?;
        self.focus();

        Ok(())
    }

    pub fn handle_session_failed(&mut self, message: &str) {
        self.phase = Phase::Failed(message.to_string());
        self.input_focused = false;
    }

    pub fn handle_render_finished(&mut self) {
        self.session.job_finished();
    }

    pub fn handle_input(&mut self, input: Input) {
        if !self.input_focused {
            return;
        }

        // The field is single-line; ignore the editor's own newline bindings.
        if let Input {
            key: Key::Char('m' | 'j'),
            ctrl: true,
            ..
        } = input
        {
            return;
        }

        self.input.input(input);
        self.sync_pending_input();
    }

    pub fn handle_paste(&mut self, text: &str) {
        if !self.input_focused {
            return;
        }

        self.input.insert_str(text.replace(['\r', '\n'], " "));
        self.sync_pending_input();
    }

    /// Sends the pending line to the interpreter. Does nothing while the
    /// input is unfocused or no session exists.
    pub fn submit(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        if !self.input_focused || self.phase != Phase::Ready {
            return Ok(());
        }

        let line = self.session.take_input();
        self.input = TextArea::default();
        self.session.job_queued();
        tx.send(Action::Submit(line))?;

        Ok(())
    }

    pub fn focus(&mut self) {
        if self.phase == Phase::Ready {
            self.input_focused = true;
        }
    }

    pub fn blur(&mut self) {
        self.input_focused = false;
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width.into();
        self.last_known_height = rect.height.into();
        if self.output.width() != self.last_known_width.max(1) {
            self.output
                .rewrap(self.session.rendered_text(), self.last_known_width);
        }
        self.sync_dependants();
    }

    /// Output lines wrapped to the last known width.
    pub fn output_lines(&self) -> &[String] {
        return self.output.lines();
    }

    fn sync_pending_input(&mut self) {
        let line = self.input.lines().join("");
        self.session.set_pending_input(&line);
    }

    fn sync_dependants(&mut self) {
        let scrollbar_at_bottom = self.scroll.is_position_at_last();
        self.scroll
            .set_state(self.output.len(), self.last_known_height);

        if scrollbar_at_bottom {
            self.scroll.last();
        }
    }
}
