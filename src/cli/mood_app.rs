use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{error, warn};

use crate::cli::console::Console;
use crate::cli::Flow;
use crate::error::TasktunesError;
use crate::models::Song;
use crate::output;
use crate::store::MoodTunes;

const BANNER: &str = "🎵 Welcome to MoodTunes — your mood-based music buddy!";
const MENU: &str = "\n1. Recommend Song\n2. Add Song\n3. Show Moods\n4. Save & Exit";

pub fn run(path: &Path) -> i32 {
    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout().lock());
    let result = MoodApp::open(path, console).and_then(|mut app| app.run());
    match result {
        Ok(()) => 0,
        Err(e) => {
            error!(code = e.code.as_str(), "{}", e.message);
            eprintln!("Error: {}", e.message);
            1
        }
    }
}

/// Menu loop state for the mood recommender.
pub struct MoodApp<R, W> {
    tunes: MoodTunes,
    path: PathBuf,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> MoodApp<R, W> {
    pub fn new(tunes: MoodTunes, path: impl Into<PathBuf>, console: Console<R, W>) -> Self {
        Self {
            tunes,
            path: path.into(),
            console,
        }
    }

    pub fn open(path: &Path, console: Console<R, W>) -> Result<Self, TasktunesError> {
        Ok(Self::new(MoodTunes::open(path)?, path, console))
    }

    pub fn run(&mut self) -> Result<(), TasktunesError> {
        self.console.say(BANNER)?;
        loop {
            self.console.say(MENU)?;
            let flow = match self.console.ask("Choose: ")?.as_deref() {
                None => Flow::Closed,
                Some("1") => self.recommend()?,
                Some("2") => self.add_song()?,
                Some("3") => self.show_moods()?,
                Some("4") => self.save_and_exit()?,
                Some(_) => {
                    self.console.say("Invalid option. Try again.")?;
                    Flow::Continue
                }
            };
            match flow {
                Flow::Continue => {}
                Flow::Quit => return Ok(()),
                Flow::Closed => {
                    warn!(path = %self.path.display(), "input closed before exit, unsaved songs discarded");
                    return Ok(());
                }
            }
        }
    }

    fn recommend(&mut self) -> Result<Flow, TasktunesError> {
        let Some(mood) = self.console.ask("Enter your mood: ")? else {
            return Ok(Flow::Closed);
        };
        match self.tunes.recommend(&mood.to_lowercase()) {
            Some(song) => self.console.say(format!("\n🎶 Try this: {song}"))?,
            None => self
                .console
                .say("😕 No songs found for that mood. Add some first!")?,
        }
        Ok(Flow::Continue)
    }

    fn add_song(&mut self) -> Result<Flow, TasktunesError> {
        let Some(mood) = self.console.ask("Enter mood to add to: ")? else {
            return Ok(Flow::Closed);
        };
        let Some(title) = self.console.ask("Song title: ")? else {
            return Ok(Flow::Closed);
        };
        let Some(artist) = self.console.ask("Artist: ")? else {
            return Ok(Flow::Closed);
        };
        self.tunes.add_song(&mood.to_lowercase(), Song::new(title, artist));
        self.console.say("✅ Song added!")?;
        Ok(Flow::Continue)
    }

    fn show_moods(&mut self) -> Result<Flow, TasktunesError> {
        output::text::write_mood_list(self.console.output_mut(), &self.tunes)?;
        Ok(Flow::Continue)
    }

    fn save_and_exit(&mut self) -> Result<Flow, TasktunesError> {
        self.tunes.save(&self.path)?;
        self.console.say("🎉 Saved! See you later.")?;
        Ok(Flow::Quit)
    }
}
