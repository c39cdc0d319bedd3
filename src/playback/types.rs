//! Tone preview data types

use serde::Serialize;

/// One scheduled tone for the host's oscillator.
///
/// `frequency` is `None` for cards that take time but make no sound
/// (`start`, `pause`, unknown pitch names).
///
/// # Fields
/// - `note_index`: index of the card in the parsed sequence
/// - `start_ms`: offset from the beginning of the song
/// - `duration_ms`: card duration at the given tempo
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToneEvent {
    pub note_index: usize,
    pub frequency: Option<f64>,
    pub start_ms: f64,
    pub duration_ms: f64,
}
