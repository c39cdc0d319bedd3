//! beatcards: note-card parsing and row layout for a step-through visual
//! metronome.
//!
//! The two core operations are [`parse`] (notation string → cards) and
//! [`layout_rows`] (cards → display rows). Both are pure and never fail.
//!
//! # Example
//! ```rust
//! use beatcards::{layout_rows, parse};
//!
//! let notes = parse("C D E | F G");
//! let rows = layout_rows(&notes, 60.0, 800.0);
//! assert_eq!(rows, vec![vec![0], vec![1, 2, 3, 5, 6]]);
//! ```

pub mod api;
pub mod ast;
pub mod color;
pub mod config;
pub mod controls;
pub mod error;
pub mod layout;
pub mod lexer;
pub mod parser;
pub mod playback;
pub mod semantic;
pub mod songbook;

pub use api::{build_view, layout_song, View};
pub use ast::*;
pub use color::{ColorSpec, Rgb};
pub use config::{DisplayMode, Settings};
pub use controls::Action;
pub use error::*;
pub use layout::{layout_rows, layout_rows_with_gap};
pub use parser::{parse, parse_opt};
pub use playback::{Stepper, ToneEvent};
pub use semantic::{lint, validate, Diagnostic};
pub use songbook::{SongBook, SongEntry};
