//! Core console logic.
//!
//! The document model, the command interpreter and the render queue live here,
//! independent of the terminal backend and of where the document comes from.

pub mod models;
pub mod services;
