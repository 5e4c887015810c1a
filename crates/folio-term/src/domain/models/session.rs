use super::Output;

/// Mutable console state: what has been printed, what is being typed, and
/// whether an animation is still running.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminalSession {
    rendered_text: String,
    pending_input: String,
    jobs_in_flight: usize,
}

impl TerminalSession {
    pub fn rendered_text(&self) -> &str {
        return &self.rendered_text;
    }

    pub fn pending_input(&self) -> &str {
        return &self.pending_input;
    }

    pub fn set_pending_input(&mut self, input: &str) {
        self.pending_input = input.to_string();
    }

    /// Takes the current input line and leaves the buffer empty.
    pub fn take_input(&mut self) -> String {
        return std::mem::take(&mut self.pending_input);
    }

    pub fn is_rendering(&self) -> bool {
        return self.jobs_in_flight > 0;
    }

    pub fn job_queued(&mut self) {
        self.jobs_in_flight += 1;
    }

    pub fn job_finished(&mut self) {
        self.jobs_in_flight = self.jobs_in_flight.saturating_sub(1);
    }

    pub fn apply(&mut self, output: &Output) {
        match output {
            Output::Text(text) => self.rendered_text.push_str(text),
            Output::Char(c) => self.rendered_text.push(*c),
            Output::LineBreak => self.rendered_text.push('\n'),
            Output::Clear => self.rendered_text.clear(),
        }
    }
}
