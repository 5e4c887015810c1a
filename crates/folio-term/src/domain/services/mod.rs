mod actions;
mod app_state;
mod bootstrap;
mod events;
mod interpreter;
mod renderer;
mod scroll;

pub use actions::*;
pub use app_state::*;
pub use bootstrap::*;
pub use events::*;
pub use interpreter::*;
pub use renderer::*;
pub use scroll::*;
