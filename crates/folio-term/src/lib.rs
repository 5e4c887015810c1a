//! Terminal portfolio console.
//!
//! This crate loads a portfolio document, interprets a small fixed command
//! language over it and types every answer out character by character into a
//! scrolling terminal view.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;
pub use application::ui::{destruct_terminal_for_panic, start_loop};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{Action, Command, Event, LoadError, PortfolioDocument};
pub use domain::services::{ActionsService, Pacing};
pub use infrastructure::loaders::DocumentLoaderManager;
