mod action;
mod command;
mod document_loader;
mod event;
mod portfolio;
mod segment;
mod session;

pub use action::*;
pub use command::*;
pub use document_loader::*;
pub use event::*;
pub use portfolio::*;
pub use segment::*;
pub use session::*;
