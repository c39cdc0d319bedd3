//! # Public API
//!
//! One-call entry points for hosts that just want something to draw.
//!
//! - [`build_view()`] - parse a song and lay it out for the current
//!   display mode
//! - [`layout_song()`] - parse and lay out in static mode
//!
//! ## Typical Usage
//!
//! ```rust
//! use beatcards::{build_view, DisplayMode, Settings};
//!
//! let settings = Settings {
//!     display_mode: DisplayMode::Dynamic,
//!     lookahead: 2,
//!     ..Settings::default()
//! };
//! let view = build_view("C D E F", &settings, 800.0, 1);
//! assert_eq!(view.window, vec![1, 2, 3]);
//! assert!(view.rows.is_empty());
//! ```

use serde::Serialize;

use crate::ast::{Note, Row};
use crate::config::{DisplayMode, Settings};
use crate::layout::layout_rows_with_gap;
use crate::parser::parse;
use crate::playback::focus_window;

/// Everything a renderer needs for one frame.
///
/// Exactly one of `rows` (static mode) and `window` (dynamic mode) is
/// filled for a non-empty song.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    pub notes: Vec<Note>,
    pub mode: DisplayMode,
    pub rows: Vec<Row>,
    pub window: Vec<usize>,
    pub active: usize,
}

/// Parse `song` and lay it out for `settings.display_mode`.
///
/// `active` is clamped to the last card.
pub fn build_view(song: &str, settings: &Settings, container_width: f64, active: usize) -> View {
    let notes = parse(song);
    let active = active.min(notes.len().saturating_sub(1));

    let (rows, window) = match settings.display_mode {
        DisplayMode::Static => (
            layout_rows_with_gap(&notes, settings.unit_size, container_width, settings.gap),
            Vec::new(),
        ),
        DisplayMode::Dynamic => (
            Vec::new(),
            focus_window(notes.len(), active, settings.lookahead),
        ),
    };

    View {
        notes,
        mode: settings.display_mode,
        rows,
        window,
        active,
    }
}

/// Parse and lay out in one step with the default gap.
///
/// # Example
/// ```rust
/// use beatcards::layout_song;
///
/// assert_eq!(layout_song("C D", 60.0, 800.0), vec![vec![0, 1, 2]]);
/// assert!(layout_song("", 60.0, 800.0).is_empty());
/// ```
pub fn layout_song(song: &str, unit_size: f64, container_width: f64) -> Vec<Row> {
    crate::layout::layout_rows(&parse(song), unit_size, container_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_view() {
        let view = build_view("C D | E F", &Settings::default(), 1000.0, 0);
        assert_eq!(view.mode, DisplayMode::Static);
        assert_eq!(view.rows, vec![vec![0], vec![1, 2, 4, 5]]);
        assert!(view.window.is_empty());
        assert_eq!(view.notes.len(), 6);
    }

    #[test]
    fn test_dynamic_view_clamps_active() {
        let settings = Settings {
            display_mode: DisplayMode::Dynamic,
            ..Settings::default()
        };
        let view = build_view("C D", &settings, 1000.0, 99);
        assert_eq!(view.active, 2);
        assert_eq!(view.window, vec![2]);
    }

    #[test]
    fn test_empty_view() {
        let view = build_view("", &Settings::default(), 1000.0, 3);
        assert!(view.notes.is_empty());
        assert!(view.rows.is_empty());
        assert_eq!(view.active, 0);
    }

    #[test]
    fn test_view_serializes() {
        let view = build_view("C", &Settings::default(), 1000.0, 0);
        let json = serde_json::to_string(&view).unwrap();
        assert!(json.contains(r#""mode":"static""#));
        assert!(json.contains(r#""rows":[[0,1]]"#));
    }
}
