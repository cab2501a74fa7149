use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::Song;

/// Songs collected under one mood label. Songs are only ever appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodPlaylist {
    pub mood: String,
    pub songs: Vec<Song>,
}

impl MoodPlaylist {
    pub fn new(mood: impl Into<String>) -> Self {
        Self {
            mood: mood.into(),
            songs: Vec::new(),
        }
    }

    pub fn add_song(&mut self, song: Song) {
        self.songs.push(song);
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Uniform pick; `None` only when the playlist is empty.
    pub fn random_song<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Song> {
        self.songs.choose(rng)
    }

    pub fn to_json(&self) -> Value {
        json!({
            "mood": self.mood,
            "songs": self.songs.iter().map(Song::to_json).collect::<Vec<_>>()
        })
    }

    pub fn from_json(value: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sad() -> MoodPlaylist {
        let mut p = MoodPlaylist::new("sad");
        p.add_song(Song::new("Hurt", "Johnny Cash"));
        p.add_song(Song::new("Everybody Hurts", "R.E.M."));
        p
    }

    #[test]
    fn test_random_song_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(MoodPlaylist::new("calm").random_song(&mut rng).is_none());
    }

    #[test]
    fn test_random_song_is_member() {
        let playlist = sad();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let song = playlist.random_song(&mut rng).unwrap();
            assert!(playlist.songs.contains(song));
        }
    }

    #[test]
    fn test_json_round_trip_keeps_song_order() {
        let playlist = sad();
        let back = MoodPlaylist::from_json(&playlist.to_json()).unwrap();
        assert_eq!(back, playlist);
        assert_eq!(back.songs[0].title, "Hurt");
    }

    #[test]
    fn test_serialized_key_order() {
        let mut playlist = MoodPlaylist::new("sad");
        playlist.add_song(Song::new("Hurt", "Johnny Cash"));
        let text = serde_json::to_string(&playlist).unwrap();
        assert_eq!(
            text,
            r#"{"mood":"sad","songs":[{"title":"Hurt","artist":"Johnny Cash"}]}"#
        );
    }

    #[test]
    fn test_from_json_missing_songs() {
        let err = MoodPlaylist::from_json(&json!({"mood": "sad"})).unwrap_err();
        assert!(err.to_string().contains("missing field `songs`"), "{err}");
    }

    #[test]
    fn test_from_json_bad_song() {
        let v = json!({"mood": "sad", "songs": [{"title": "Hurt"}]});
        assert!(MoodPlaylist::from_json(&v).is_err());
    }
}
