//! Infrastructure layer providing external integrations.
//!
//! This module contains the document loaders that read the portfolio from a
//! remote server or from the local filesystem.

pub mod loaders;
