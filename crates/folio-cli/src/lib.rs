//! Unified command-line entry point for the portfolio console.
//!
//! One binary runs the document server and the console together, or either
//! of them on its own.

pub mod embedded_ui;
pub mod run_mode;
