//! folio-server binary
//!
//! Publishes a portfolio document for the console to fetch.

use clap::ArgAction;
use clap::Parser;
use folio_server::{load_document, shutdown_signal, DocumentServer, ServerConfig};
use std::path::PathBuf;

/// Command line arguments for the document server.
#[derive(Parser, Debug)]
#[command(name = "folio-server")]
#[command(about = "Serves the portfolio document read by the folio console")]
#[command(version)]
struct Args {
    /// Server bind address
    #[arg(short, long, default_value = "127.0.0.1:5000")]
    bind: String,

    /// Portfolio JSON file (defaults to the bundled sample)
    #[arg(short, long)]
    document: Option<PathBuf>,

    /// Enable CORS (`--cors false` to disable)
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    cors: bool,

    /// Enable request logging (`--logging false` to disable)
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    logging: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.parse().unwrap_or(log::LevelFilter::Info))
        .init();

    let config = ServerConfig::new()
        .with_bind_addr_str(&args.bind)?
        .with_cors(args.cors)
        .with_logging(args.logging);

    let document = load_document(args.document.as_deref()).await?;
    let server = DocumentServer::with_config(document, config);

    server.serve_with_shutdown(shutdown_signal()).await?;

    Ok(())
}
