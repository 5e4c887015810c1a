//! Application layer orchestrating the console.
//!
//! This module handles command-line parsing and the main UI loop. It
//! coordinates between the domain logic and the terminal.

pub mod cli;
pub mod ui;
