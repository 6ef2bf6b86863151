pub mod keymap;
pub mod renderer;
pub mod session;

pub use session::{InteractiveSession, SessionEvent, SessionState};
