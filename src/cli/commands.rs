use std::path::PathBuf;

use clap::Parser;

use crate::store::{MOODS_FILE, TASKS_FILE};

const VERSION: &str = env!("GIT_VERSION");

#[derive(Parser)]
#[command(
    name = "tasks",
    version = VERSION,
    about = "Interactive personal task list",
    after_help = "\
MENU:
  1  Add task (title, priority, optional due date)
  2  List all tasks
  3  Complete a task by its number
  4  Save
  5  Save and quit

NOTE:
  Changes are written only on 4 or 5. Closing stdin quits without saving.
  A missing task file starts an empty list; a malformed one is an error (exit code 1)."
)]
pub struct TasksCli {
    /// Task file to load at start and write on save
    #[arg(long, env = "TASKS_FILE", default_value = TASKS_FILE)]
    pub file: PathBuf,
}

#[derive(Parser)]
#[command(
    name = "moodtunes",
    version = VERSION,
    about = "Mood-based song recommender",
    after_help = "\
MENU:
  1  Recommend a random song for a mood
  2  Add a song to a mood (created on first use)
  3  Show moods with song counts
  4  Save and quit

NOTE:
  Moods are lower-cased before lookup. Changes are written only on 4."
)]
pub struct MoodTunesCli {
    /// Playlist file to load at start and write on save
    #[arg(long, env = "MOODTUNES_FILE", default_value = MOODS_FILE)]
    pub file: PathBuf,
}
