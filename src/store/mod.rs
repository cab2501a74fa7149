pub mod json_file;
pub mod task_manager;
pub mod mood_tunes;

pub use json_file::{MOODS_FILE, TASKS_FILE};
pub use mood_tunes::MoodTunes;
pub use task_manager::TaskManager;
