use std::io::{self, Write};

use crate::models::Task;
use crate::store::MoodTunes;

pub fn write_task_list<'a, W: Write>(
    out: &mut W,
    entries: impl Iterator<Item = (usize, &'a Task)>,
) -> io::Result<()> {
    let mut any = false;
    for (number, task) in entries {
        writeln!(out, "{number}. {task}")?;
        any = true;
    }
    if !any {
        writeln!(out, "No tasks found.")?;
    }
    Ok(())
}

pub fn write_mood_list<W: Write>(out: &mut W, tunes: &MoodTunes) -> io::Result<()> {
    if tunes.is_empty() {
        writeln!(out, "No moods yet.")?;
    }
    for (mood, count) in tunes.moods() {
        writeln!(out, "- {} ({count} songs)", capitalize(mood))?;
    }
    Ok(())
}

/// First character upper-cased, the rest lower-cased.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
