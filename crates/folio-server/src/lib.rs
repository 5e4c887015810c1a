//! Read-only HTTP publication of the portfolio document.
//!
//! The console fetches its document from `/static/portfolio.json`. This crate
//! serves that location (and the `/api/portfolio` alias) from a JSON file or
//! from the bundled sample portfolio.

pub mod error;

pub use error::{Result, ServerError};

use axum::extract::State;
use axum::response::Json;
use axum::routing::get;
use axum::{middleware, Router};
use serde::Serialize;
use serde_json::Value;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Sample portfolio served when no document file is given.
pub const DEFAULT_DOCUMENT: &str = include_str!("../assets/portfolio.json");

/// Where the console looks for the document by default.
pub const DOCUMENT_PATH: &str = "/static/portfolio.json";
pub const API_PATH: &str = "/api/portfolio";

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
}

/// Configuration for the document server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind address
    pub bind_addr: SocketAddr,
    /// Enable CORS
    pub enable_cors: bool,
    /// Enable request logging
    pub enable_logging: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            enable_cors: true,
            enable_logging: true,
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bind address.
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// Parse and set the bind address from a string.
    pub fn with_bind_addr_str(mut self, addr: &str) -> Result<Self> {
        self.bind_addr = addr
            .parse()
            .map_err(|e| ServerError::config_error(format!("Invalid bind address: {}", e)))?;
        Ok(self)
    }

    /// Enable or disable CORS.
    pub fn with_cors(mut self, enable: bool) -> Self {
        self.enable_cors = enable;
        self
    }

    /// Enable or disable request logging.
    pub fn with_logging(mut self, enable: bool) -> Self {
        self.enable_logging = enable;
        self
    }
}

/// Reads and parses the document once. `None` selects the bundled sample.
pub async fn load_document(path: Option<&Path>) -> Result<Value> {
    let text = match path {
        Some(path) => {
            log::info!("Loading portfolio document from {}", path.display());
            tokio::fs::read_to_string(path).await?
        }
        None => {
            log::info!("Using the bundled portfolio document");
            DEFAULT_DOCUMENT.to_string()
        }
    };

    Ok(serde_json::from_str(&text)?)
}

#[derive(Clone)]
struct AppState {
    document: Arc<Value>,
}

async fn portfolio_handler(State(app_state): State<AppState>) -> Json<Value> {
    log::debug!("Serving portfolio document");
    Json(app_state.document.as_ref().clone())
}

pub struct DocumentServer {
    document: Arc<Value>,
    config: ServerConfig,
}

impl DocumentServer {
    pub fn new(document: Value) -> Self {
        Self {
            document: Arc::new(document),
            config: ServerConfig::default(),
        }
    }

    pub fn with_config(document: Value, config: ServerConfig) -> Self {
        Self {
            document: Arc::new(document),
            config,
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn build_router(&self) -> Router {
        let state = AppState {
            document: self.document.clone(),
        };

        let mut router = Router::new()
            .route(
                "/health",
                get(|| async {
                    Json(HealthResponse {
                        status: "healthy".to_string(),
                        timestamp: chrono::Utc::now(),
                        version: env!("CARGO_PKG_VERSION").to_string(),
                    })
                }),
            )
            .route(DOCUMENT_PATH, get(portfolio_handler))
            .route(API_PATH, get(portfolio_handler))
            .with_state(state);

        if self.config.enable_logging {
            router = router.layer(middleware::from_fn(
                |request: axum::http::Request<axum::body::Body>,
                 next: axum::middleware::Next| async {
                    let method = request.method().clone();
                    let uri = request.uri().clone();

                    let start = std::time::Instant::now();
                    let response = next.run(request).await;
                    log::info!(
                        "{} {} -> {} in {:?}",
                        method,
                        uri,
                        response.status(),
                        start.elapsed()
                    );

                    response
                },
            ));
        }

        router = router.layer(TraceLayer::new_for_http());

        if self.config.enable_cors {
            router = router.layer(CorsLayer::permissive());
        }

        router
    }

    /// Binds the configured address and serves until `shutdown_signal`
    /// resolves.
    pub async fn serve_with_shutdown<F>(self, shutdown_signal: F) -> Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.config.bind_addr)
            .await
            .map_err(|e| {
                ServerError::config_error(format!(
                    "Failed to bind to {}: {}",
                    self.config.bind_addr, e
                ))
            })?;

        self.serve_listener(listener, shutdown_signal).await
    }

    /// Serves on an already bound listener.
    pub async fn serve_listener<F>(self, listener: TcpListener, shutdown_signal: F) -> Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        let router = self.build_router();

        log::info!("Portfolio server starting on {}", addr);
        log::info!("Document: http://{}{}", addr, DOCUMENT_PATH);
        log::info!("Health check: http://{}/health", addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(|e| ServerError::internal(format!("Server error: {}", e)))?;

        log::info!("Portfolio server shut down gracefully");
        Ok(())
    }
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                log::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            log::info!("Received Ctrl+C, shutting down...");
        },
        _ = terminate => {
            log::info!("Received SIGTERM, shutting down...");
        },
    }
}
