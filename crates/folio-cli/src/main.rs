use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use folio_cli::embedded_ui;
use folio_cli::run_mode::{embedded_document_url, RunMode};
use folio_server::{load_document, shutdown_signal, DocumentServer, ServerConfig};
use folio_term::configuration::{Config, ConfigKey};
use log::LevelFilter;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use tokio::net::TcpListener;

fn command() -> Command {
    folio_term::application::cli::build()
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("bind-addr")
                .long("bind-addr")
                .default_value("127.0.0.1:5000")
                .help("Address the document server binds to"),
        )
        .arg(
            Arg::new("document")
                .long("document")
                .short('d')
                .help("Portfolio JSON file the server publishes (defaults to the bundled sample)"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .short('l')
                .default_value("info"),
        )
        .arg(
            Arg::new("embedded")
                .long("embedded")
                .action(ArgAction::SetTrue)
                .help("Run both server and console in the same process (default mode)"),
        )
        .arg(
            Arg::new("server-only")
                .long("server-only")
                .action(ArgAction::SetTrue)
                .help("Server only mode - no console"),
        )
        .arg(
            Arg::new("terminal-only")
                .long("terminal-only")
                .action(ArgAction::SetTrue)
                .help("Console only mode - no server"),
        )
}

fn init_logging(mode: RunMode, level: LevelFilter) -> Result<()> {
    if !mode.has_ui() {
        env_logger::Builder::new().filter_level(level).init();
        return Ok(());
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("folio.log")?;

    env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    Ok(())
}

fn server_config(matches: &ArgMatches, mode: RunMode) -> Result<ServerConfig> {
    let bind_addr = matches
        .get_one::<String>("bind-addr")
        .map(String::as_str)
        .unwrap_or("127.0.0.1:5000");

    Ok(ServerConfig::new()
        .with_bind_addr_str(bind_addr)?
        .with_logging(!matches!(mode, RunMode::Embedded)))
}

async fn run_embedded(matches: &ArgMatches, document_path: Option<PathBuf>) -> Result<()> {
    print!("Starting folio embedded mode");
    io::stdout().flush()?;

    let config = server_config(matches, RunMode::Embedded)?;
    let document = load_document(document_path.as_deref()).await?;
    print!(".");
    io::stdout().flush()?;

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", config.bind_addr, e))?;
    let addr = listener.local_addr()?;

    let document_url = embedded_document_url(
        &Config::get(ConfigKey::DocumentUrl),
        &Config::default(ConfigKey::DocumentUrl),
        addr,
    );
    Config::set(ConfigKey::DocumentUrl, &document_url);

    let server = DocumentServer::with_config(document, config);
    let server_task =
        tokio::spawn(async move { server.serve_listener(listener, shutdown_signal()).await });
    println!(". ready!");

    let ui_result = embedded_ui::run_ui().await;

    server_task.abort();

    ui_result
}

#[tokio::main]
async fn main() -> Result<()> {
    let cmd = command();
    let matches = cmd.clone().get_matches();

    let mode = RunMode::from_flags(
        matches.get_flag("embedded"),
        matches.get_flag("server-only"),
        matches.get_flag("terminal-only"),
    )?;

    let log_level_filter = matches
        .get_one::<String>("log-level")
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Info);
    init_logging(mode, log_level_filter)?;

    Config::load(cmd, vec![&matches]).await?;
    log::info!("Starting folio in {} mode", mode.name());

    let document_path = matches.get_one::<String>("document").map(PathBuf::from);

    match mode {
        RunMode::Embedded => run_embedded(&matches, document_path).await,
        RunMode::ServerOnly => {
            let config = server_config(&matches, mode)?;
            let document = load_document(document_path.as_deref()).await?;
            DocumentServer::with_config(document, config)
                .serve_with_shutdown(shutdown_signal())
                .await
                .map_err(|e| e.into())
        }
        RunMode::TerminalOnly => embedded_ui::run_ui().await,
    }
}
