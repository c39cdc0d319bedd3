//! # Note Card Types
//!
//! A parsed song is a flat `Vec<Note>`. There is no tree: measures are
//! implied by barline sentinels and only materialize inside the layout
//! engine.
//!
//! ```text
//! "C/2 D*3 | E"  ──parse──▶  [start/1, C4/0.5, D4/3, |/0, E4/1]
//! ```
//!
//! ## Sentinels
//! - `start` - synthetic first card, "play begins here"
//! - `pause` - a rest; keeps its duration, never gets an octave
//! - `|` - barline; zero duration, separates measures
//!
//! Sentinel checks on `start` and `pause` are case-insensitive, so
//! `Pause/2` and `START` are recognized.

use serde::{Deserialize, Serialize};

pub const START: &str = "start";
pub const PAUSE: &str = "pause";
pub const BARLINE: &str = "|";

/// Octave appended to pitch names written without one.
pub const DEFAULT_OCTAVE: char = '4';

/// A row is a list of indices into the note sequence.
pub type Row = Vec<usize>;

/// One timed card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub pitch: String,
    pub duration: f64,
}

impl Note {
    pub fn new(pitch: impl Into<String>, duration: f64) -> Self {
        Self {
            pitch: pitch.into(),
            duration,
        }
    }

    /// The synthetic leading card.
    pub fn start() -> Self {
        Self::new(START, 1.0)
    }

    pub fn barline() -> Self {
        Self::new(BARLINE, 0.0)
    }

    pub fn is_barline(&self) -> bool {
        self.pitch == BARLINE
    }

    pub fn is_start(&self) -> bool {
        is_start_name(&self.pitch)
    }

    pub fn is_pause(&self) -> bool {
        is_pause_name(&self.pitch)
    }

    /// True for cards that carry a real pitch (not a sentinel).
    pub fn is_pitched(&self) -> bool {
        !(self.is_barline() || self.is_start() || self.is_pause())
    }
}

pub fn is_start_name(name: &str) -> bool {
    name.eq_ignore_ascii_case(START)
}

pub fn is_pause_name(name: &str) -> bool {
    name.eq_ignore_ascii_case(PAUSE)
}

/// Strip a trailing octave number from a pitch name: `"A#3"` → `"A#"`.
pub fn pitch_class(pitch: &str) -> &str {
    pitch.trim_end_matches(|c: char| c.is_ascii_digit() || c == '-')
}
