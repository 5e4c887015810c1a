use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::services::AppState;
use crate::domain::services::EventsService;
use crate::domain::services::Phase;
use crate::domain::services::PROMPT;

fn render_output(frame: &mut Frame, app_state: &mut AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" folio ")
        .border_style(Style::default().fg(Color::DarkGray));
    app_state.set_rect(block.inner(area));

    let lines = app_state
        .output_lines()
        .iter()
        .skip(app_state.scroll.position())
        .take(app_state.last_known_height)
        .map(|line| {
            if line.starts_with(PROMPT) {
                return Line::styled(line.as_str(), Style::default().fg(Color::Green));
            }
            return Line::raw(line.as_str());
        })
        .collect::<Vec<Line>>();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_input(frame: &mut Frame, app_state: &mut AppState, area: Rect) {
    let title = match app_state.phase {
        Phase::Loading => " loading ",
        Phase::Failed(_) => " offline ",
        Phase::Ready if app_state.input_focused => " input ",
        Phase::Ready => " click to type ",
    };
    let border_color = if app_state.input_focused {
        Color::Green
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [prompt_area, text_area] =
        Layout::horizontal([Constraint::Length(PROMPT.len() as u16), Constraint::Min(1)])
            .areas(inner);

    frame.render_widget(
        Span::styled(PROMPT, Style::default().fg(Color::Green)),
        prompt_area,
    );

    let cursor_style = if app_state.input_focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    app_state.input.set_cursor_style(cursor_style);
    app_state.input.set_cursor_line_style(Style::default());
    frame.render_widget(&app_state.input, text_area);
}

fn render_status(frame: &mut Frame, app_state: &AppState, area: Rect) {
    let status = match &app_state.phase {
        Phase::Failed(message) => Span::styled(message.clone(), Style::default().fg(Color::Red)),
        _ if app_state.session.is_rendering() => Span::raw("typing..."),
        _ => Span::raw(""),
    };
    let hints = Span::styled(
        "  Esc blur | click focus | PgUp/PgDn scroll | Ctrl+C quit",
        Style::default().fg(Color::DarkGray),
    );

    frame.render_widget(Line::from(vec![status, hints]), area);
}

fn render(frame: &mut Frame, app_state: &mut AppState) {
    let [output_area, input_area, status_area] = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_output(frame, app_state, output_area);
    render_input(frame, app_state, input_area);
    render_status(frame, app_state, status_area);
}

/// Runs the console until Ctrl+C. Draws after every event.
pub async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut app_state = AppState::new();
    let mut events = EventsService::new(rx);

    loop {
        terminal.draw(|frame| render(frame, &mut app_state))?;

        match events.next().await? {
            Event::Output(output) => app_state.handle_output(&output),
            Event::RenderFinished => app_state.handle_render_finished(),
            Event::SessionReady => app_state.handle_session_ready(&tx)?,
            Event::SessionFailed(message) => app_state.handle_session_failed(&message),
            Event::KeyboardCharInput(input) => app_state.handle_input(input),
            Event::KeyboardPaste(text) => app_state.handle_paste(&text),
            Event::KeyboardEnter => app_state.submit(&tx)?,
            Event::KeyboardEsc => app_state.blur(),
            Event::MouseClick => app_state.focus(),
            Event::KeyboardCTRLC => break,
            Event::UIScrollUp => app_state.scroll.up(),
            Event::UIScrollDown => app_state.scroll.down(),
            Event::UIScrollPageUp => app_state.scroll.up_page(),
            Event::UIScrollPageDown => app_state.scroll.down_page(),
            Event::UITick => {}
        }
    }

    return Ok(());
}

/// Restores the terminal so a panic message is readable.
pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste,
        cursor::Show
    );
}
