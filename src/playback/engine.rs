//! Tone schedule generation
//!
//! Turns a card sequence into timed tone events for the optional audio
//! preview. Timing is best effort: the host plays each event when the user
//! steps onto its card, or back to back for a preview run.

use crate::ast::Note;
use super::tone::pitch_frequency;
use super::types::ToneEvent;

const FALLBACK_TEMPO: f64 = 60.0;

/// Milliseconds per duration unit at `tempo_bpm`, one unit per beat.
fn unit_ms(tempo_bpm: f64) -> f64 {
    let bpm = if tempo_bpm.is_finite() && tempo_bpm > 0.0 {
        tempo_bpm
    } else {
        FALLBACK_TEMPO
    };
    60_000.0 / bpm
}

/// Build one tone event per non-barline card.
///
/// Barlines take no time and produce no event. Cards with a negative or
/// non-finite duration are scheduled with zero length so later cards keep
/// a sensible start time.
pub fn tone_schedule(notes: &[Note], tempo_bpm: f64) -> Vec<ToneEvent> {
    let unit = unit_ms(tempo_bpm);
    let mut events = Vec::with_capacity(notes.len());
    let mut cursor = 0.0;

    for (note_index, note) in notes.iter().enumerate() {
        if note.is_barline() {
            continue;
        }

        let duration = if note.duration.is_finite() {
            note.duration.max(0.0)
        } else {
            0.0
        };
        let duration_ms = duration * unit;
        let frequency = if note.is_pitched() {
            pitch_frequency(&note.pitch)
        } else {
            None
        };

        events.push(ToneEvent {
            note_index,
            frequency,
            start_ms: cursor,
            duration_ms,
        });
        cursor += duration_ms;
    }

    log::debug!("scheduled {} tones over {} ms", events.len(), cursor);
    events
}
