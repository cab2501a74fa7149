pub mod task;
pub mod song;
pub mod playlist;

pub use task::*;
pub use song::*;
pub use playlist::*;
