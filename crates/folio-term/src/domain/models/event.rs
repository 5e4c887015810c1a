use tui_textarea::Input;

/// Changes to the output surface, in the order they must be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Instant text written during startup, before a session exists.
    Text(String),
    /// One typed character.
    Char(char),
    /// The line break that ends an animated line.
    LineBreak,
    Clear,
}

#[derive(Debug)]
pub enum Event {
    Output(Output),
    RenderFinished,
    SessionReady,
    SessionFailed(String),
    KeyboardCharInput(Input),
    KeyboardCTRLC,
    KeyboardEnter,
    KeyboardEsc,
    KeyboardPaste(String),
    MouseClick,
    UITick,
    UIScrollDown,
    UIScrollUp,
    UIScrollPageDown,
    UIScrollPageUp,
}
