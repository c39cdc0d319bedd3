//! # Parser Module
//!
//! Turns a notation string into the flat card sequence.
//!
//! ## Token Grammar
//! - `|` - barline, duration 0
//! - `name/d` - duration `1 / d`
//! - `name*m` - duration `m`
//! - `name` - duration 1
//!
//! A name without a trailing octave digit gets octave 4 (`F#` → `F#4`),
//! except the `pause` and `start` sentinels. Suffix numbers are read the
//! way a browser's `parseFloat` reads them: the longest leading decimal
//! literal wins and garbage after it is ignored. A suffix with no number
//! at all falls back to a duration of 1; `parse` never fails. Use
//! [`crate::lint`] to see what was silently defaulted.
//!
//! ## Example
//! ```rust
//! use beatcards::{parse, Note};
//!
//! let notes = parse("C/2 D*3 |");
//! assert_eq!(notes, vec![
//!     Note::new("start", 1.0),
//!     Note::new("C4", 0.5),
//!     Note::new("D4", 3.0),
//!     Note::new("|", 0.0),
//! ]);
//! ```

use crate::ast::*;
use crate::lexer::Lexer;

/// Duration suffix attached to a token
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Suffix<'a> {
    None,
    Denominator(&'a str),
    Multiplier(&'a str),
}

/// A token split into its name and duration suffix
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TokenParts<'a> {
    pub name: &'a str,
    pub suffix: Suffix<'a>,
}

impl<'a> TokenParts<'a> {
    /// `/` takes precedence over `*` when a token contains both.
    pub fn split(token: &'a str) -> Self {
        if let Some((name, denom)) = token.split_once('/') {
            Self {
                name,
                suffix: Suffix::Denominator(denom),
            }
        } else if let Some((name, mult)) = token.split_once('*') {
            Self {
                name,
                suffix: Suffix::Multiplier(mult),
            }
        } else {
            Self {
                name: token,
                suffix: Suffix::None,
            }
        }
    }

    pub fn duration(&self) -> f64 {
        match self.suffix {
            Suffix::None => 1.0,
            Suffix::Denominator(d) => parse_float(d).map_or(1.0, |v| 1.0 / v),
            Suffix::Multiplier(m) => parse_float(m).unwrap_or(1.0),
        }
    }
}

/// Read the longest leading decimal literal of `s`.
///
/// Mirrors `parseFloat`: leading whitespace is skipped, an optional sign,
/// digits with an optional fraction and exponent, or `Infinity`. Returns
/// `None` when no digits start the string.
pub fn parse_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        // "5." is a valid literal, a bare "." is not
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Resolve a pitch name: sentinels stay verbatim, everything else gets the
/// default octave unless it already ends in a digit.
pub(crate) fn resolve_pitch(name: &str) -> String {
    if is_pause_name(name) || is_start_name(name) {
        return name.to_string();
    }
    let mut pitch = name.to_string();
    if !name.ends_with(|c: char| c.is_ascii_digit()) {
        pitch.push(DEFAULT_OCTAVE);
    }
    pitch
}

/// Parse a single token into a card
pub fn parse_token(token: &str) -> Note {
    if token == BARLINE {
        return Note::barline();
    }
    let parts = TokenParts::split(token);
    Note::new(resolve_pitch(parts.name), parts.duration())
}

/// Parse a notation string into cards.
///
/// A non-empty result always begins with a `start` card; one is inserted
/// unless the first token already is `start`.
pub fn parse(song: &str) -> Vec<Note> {
    let mut notes: Vec<Note> = Lexer::new(song).map(|t| parse_token(t.text)).collect();

    if notes.first().is_some_and(|first| !first.is_start()) {
        notes.insert(0, Note::start());
    }

    log::debug!("parsed {} cards from {} bytes", notes.len(), song.len());
    notes
}

/// Parse an optional song; `None` is treated like an empty string.
pub fn parse_opt(song: Option<&str>) -> Vec<Note> {
    song.map(parse).unwrap_or_default()
}
