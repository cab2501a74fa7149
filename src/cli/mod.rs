pub mod commands;
pub mod console;
pub mod mood_app;
pub mod task_app;

pub use commands::*;

/// What the menu loop does after a command finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
    /// Input ended before a quit command.
    Closed,
}
