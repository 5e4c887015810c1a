//! Configuration management for the console.
//!
//! Resolves the document source and animation pacing from built-in defaults,
//! an optional TOML file and command line flags, in that order.

mod config;

pub use config::*;
