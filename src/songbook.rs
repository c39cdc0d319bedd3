//! # Song Book
//!
//! The single user-editable data blob: a list of named songs in the card
//! notation plus a pitch → color spec table. It travels as JSON so a
//! browser host can keep it in local storage.
//!
//! ```json
//! {
//!   "songs": [{ "name": "scale", "notes": "C D E F | G A B C5" }],
//!   "colors": { "C": "red", "F#": "green + blue" }
//! }
//! ```
//!
//! Both keys are optional. Colors in an override are layered over the
//! built-in table, so a blob only needs the entries it changes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ast::{pitch_class, BARLINE, PAUSE, START};
use crate::color::ColorSpec;
use crate::error::CardsError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongEntry {
    pub name: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SongBook {
    pub songs: Vec<SongEntry>,
    pub colors: BTreeMap<String, String>,
}

impl Default for SongBook {
    fn default() -> Self {
        Self {
            songs: Vec::new(),
            colors: default_colors(),
        }
    }
}

/// Built-in color table, keyed by pitch class and sentinel.
pub fn default_colors() -> BTreeMap<String, String> {
    [
        ("C", "red"),
        ("C#", "red + orange"),
        ("Db", "red + orange"),
        ("D", "orange"),
        ("D#", "orange + yellow"),
        ("Eb", "orange + yellow"),
        ("E", "yellow"),
        ("F", "green"),
        ("F#", "green + blue"),
        ("Gb", "green + blue"),
        ("G", "blue"),
        ("G#", "blue + indigo"),
        ("Ab", "blue + indigo"),
        ("A", "indigo"),
        ("A#", "indigo + violet"),
        ("Bb", "indigo + violet"),
        ("B", "violet"),
        (START, "white"),
        (PAUSE, "silver"),
        (BARLINE, "black"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

impl SongBook {
    /// Book with the given `(name, notes)` songs and the built-in colors.
    pub fn with_defaults<I, N, S>(songs: I) -> Self
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<String>,
    {
        Self {
            songs: songs
                .into_iter()
                .map(|(name, notes)| SongEntry {
                    name: name.into(),
                    notes: notes.into(),
                })
                .collect(),
            colors: default_colors(),
        }
    }

    /// Book made from the embedded song library.
    pub fn builtin() -> Self {
        Self::with_defaults(
            beatcards_songs::get_all_songs()
                .into_iter()
                .map(|song| (song.name, song.content)),
        )
    }

    /// Parse an override blob. Its colors are layered over the defaults.
    pub fn from_json(json: &str) -> Result<Self, CardsError> {
        let raw: SongBook =
            serde_json::from_str(json).map_err(|e| CardsError::Override(e.to_string()))?;
        let mut colors = default_colors();
        colors.extend(raw.colors);
        Ok(Self {
            songs: raw.songs,
            colors,
        })
    }

    /// Use the override when present and readable, otherwise the embedded
    /// library. A broken override is logged, not fatal.
    pub fn load_or_builtin(blob: Option<&str>) -> Self {
        match blob.map(Self::from_json) {
            Some(Ok(book)) => book,
            Some(Err(e)) => {
                log::warn!("{}; falling back to built-in songs", e);
                Self::builtin()
            }
            None => Self::builtin(),
        }
    }

    pub fn to_json(&self) -> Result<String, CardsError> {
        serde_json::to_string_pretty(self).map_err(|e| CardsError::Override(e.to_string()))
    }

    pub fn names(&self) -> Vec<&str> {
        self.songs.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn song(&self, name: &str) -> Result<&SongEntry, CardsError> {
        self.songs
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| CardsError::UnknownSong(name.to_string()))
    }

    /// Color for a card: exact pitch, then pitch class, then the default.
    pub fn color_for(&self, pitch: &str) -> ColorSpec {
        self.colors
            .get(pitch)
            .or_else(|| self.colors.get(pitch_class(pitch)))
            .map(|spec| ColorSpec::parse(spec))
            .unwrap_or_default()
    }
}
