use std::path::Path;

use indexmap::IndexMap;
use rand::Rng;
use tracing::{debug, info};

use crate::error::TasktunesError;
use crate::models::{MoodPlaylist, Song};

use super::json_file;

/// Playlists keyed by mood, in the order each mood was first seen.
///
/// Keys are matched exactly; callers normalize case before calling in.
#[derive(Debug, Default)]
pub struct MoodTunes {
    playlists: IndexMap<String, MoodPlaylist>,
}

impl MoodTunes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(path: &Path) -> Result<Self, TasktunesError> {
        let mut tunes = Self::new();
        tunes.load(path)?;
        Ok(tunes)
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    pub fn get_playlist(&self, mood: &str) -> Option<&MoodPlaylist> {
        self.playlists.get(mood)
    }

    pub fn playlists(&self) -> impl Iterator<Item = &MoodPlaylist> + '_ {
        self.playlists.values()
    }

    /// Mood labels with their song counts.
    pub fn moods(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.playlists.iter().map(|(mood, p)| (mood.as_str(), p.len()))
    }

    pub fn add_song(&mut self, mood: &str, song: Song) {
        info!(mood, title = %song.title, artist = %song.artist, "song added");
        self.playlists
            .entry(mood.to_string())
            .or_insert_with(|| MoodPlaylist::new(mood))
            .add_song(song);
    }

    pub fn recommend(&self, mood: &str) -> Option<&Song> {
        self.recommend_with(mood, &mut rand::thread_rng())
    }

    pub fn recommend_with<R: Rng + ?Sized>(&self, mood: &str, rng: &mut R) -> Option<&Song> {
        self.get_playlist(mood)?.random_song(rng)
    }

    pub fn save(&self, path: &Path) -> Result<(), TasktunesError> {
        let playlists: Vec<&MoodPlaylist> = self.playlists.values().collect();
        json_file::write_records(path, &playlists)?;
        debug!(path = %path.display(), moods = playlists.len(), "moods saved");
        Ok(())
    }

    /// Replace all playlists with the file contents. A later entry for a mood that
    /// already appeared earlier in the file replaces it in place.
    pub fn load(&mut self, path: &Path) -> Result<(), TasktunesError> {
        let Some(records) = json_file::read_records(path)? else {
            debug!(path = %path.display(), "no mood file, starting empty");
            self.playlists.clear();
            return Ok(());
        };
        let mut playlists = IndexMap::with_capacity(records.len());
        for record in &records {
            let playlist =
                MoodPlaylist::from_json(record).map_err(|e| TasktunesError::malformed(path, &e))?;
            playlists.insert(playlist.mood.clone(), playlist);
        }
        debug!(path = %path.display(), moods = playlists.len(), "moods loaded");
        self.playlists = playlists;
        Ok(())
    }
}
