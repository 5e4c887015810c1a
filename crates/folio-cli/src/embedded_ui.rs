use anyhow::Result;
use std::io;
use tokio::sync::mpsc;
use tokio::task;

use crossterm::{
    cursor,
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use folio_term::application::ui::{destruct_terminal_for_panic, start_loop};
use folio_term::configuration::{Config, ConfigKey};
use folio_term::domain::models::{Action, Event};
use folio_term::domain::services::ActionsService;
use folio_term::infrastructure::loaders::DocumentLoaderManager;
use ratatui::{backend::CrosstermBackend, Terminal};

/// Takes over the terminal and runs the console loop until the user quits.
pub async fn start_ui(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;

    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let result = start_loop(&mut terminal, tx, rx).await;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;

    let _ = crossterm::execute!(io::stdout(), cursor::Show);

    result
}

/// Starts the console against the configured document source.
pub async fn run_ui() -> Result<()> {
    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let document_url = Config::get(ConfigKey::DocumentUrl);
    let loader =
        DocumentLoaderManager::get(&document_url, Config::duration(ConfigKey::FetchTimeout)?)?;
    let pacing = Config::pacing()?;
    log::info!("Console reading portfolio from {}", document_url);

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();

    let mut background_futures = task::JoinSet::new();
    background_futures.spawn(async move {
        ActionsService::start(loader, pacing, event_tx, &mut action_rx).await
    });

    let ui_future = start_ui(action_tx, event_rx);

    let result = tokio::select!(
        res = background_futures.join_next() => {
            destruct_terminal_for_panic();
            match res {
                Some(Ok(res)) => res,
                Some(Err(err)) => Err(err.into()),
                None => Ok(()),
            }
        },
        res = ui_future => res,
    );

    if result.is_err() {
        destruct_terminal_for_panic();
    }

    result
}
