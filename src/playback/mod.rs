//! # Playback Module
//!
//! Everything that happens while a user steps through a song: which card
//! is active, what the dynamic display shows, and the optional tone
//! preview.
//!
//! ## Sub-modules
//! - `types` - ToneEvent definition
//! - `stepper` - manual cursor and the dynamic-mode focus window
//! - `tone` - pitch name to frequency
//! - `engine` - tone schedule for a whole song
//!
//! ## Example
//! ```rust
//! use beatcards::parse;
//! use beatcards::playback::{tone_schedule, Stepper};
//!
//! let notes = parse("C | D/2");
//! let mut stepper = Stepper::for_notes(&notes);
//! stepper.next();
//! stepper.next(); // the barline is skipped
//! assert_eq!(stepper.active(), 3);
//!
//! let tones = tone_schedule(&notes, 120.0);
//! assert_eq!(tones.len(), 3);
//! assert_eq!(tones[2].start_ms, 1000.0);
//! assert_eq!(tones[2].duration_ms, 250.0);
//! ```
//!
//! The browser host owns the oscillator; these types only describe when
//! and what to play.

mod engine;
mod stepper;
mod tone;
mod types;

#[cfg(test)]
mod tests;

pub use engine::tone_schedule;
pub use stepper::{focus_window, Stepper};
pub use tone::{pitch_frequency, pitch_to_midi};
pub use types::ToneEvent;
