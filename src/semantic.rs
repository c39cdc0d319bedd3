//! # Token Diagnostics
//!
//! `parse` is deliberately forgiving: a suffix that is not a number becomes
//! a duration of 1, and any pitch name is accepted. This module reports
//! those silent fallbacks so an editor can underline them.
//!
//! ## Checks
//! - duration suffix without a number (`C/x`, `D*`)
//! - zero denominator (`C/0`), which gives an infinite card
//! - negative duration (`C*-1`)
//! - empty pitch name (`/2`)
//! - pitch names that are neither a sentinel nor a note letter with
//!   accidentals and an optional octave (`H`, `C#x`)
//!
//! ## Entry Points
//! - [`lint()`] - every diagnostic, never fails
//! - [`validate()`] - strict mode, first diagnostic as a [`CardsError`]
//!
//! ## Example
//! ```rust
//! use beatcards::lint;
//!
//! let diagnostics = lint("C D*x E");
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].column, 3);
//! ```

use serde::Serialize;

use crate::ast::*;
use crate::error::CardsError;
use crate::lexer::{Lexer, LocatedToken};
use crate::parser::{parse_float, Suffix, TokenParts};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
}

/// A problem with one token, located for inline display
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub message: String,
    pub line: usize,
    pub column: usize,
    pub end_column: usize,
    pub severity: Severity,
}

impl Diagnostic {
    fn warning(token: &LocatedToken, message: String) -> Self {
        Self {
            message,
            line: token.line,
            column: token.column,
            end_column: token.column + token.text.chars().count(),
            severity: Severity::Warning,
        }
    }
}

/// True for `[A-Ga-g]` followed by `#`/`b` accidentals and an optional,
/// possibly negative, octave number.
pub fn is_pitch_name(name: &str) -> bool {
    let mut chars = name.chars().peekable();
    match chars.next() {
        Some(c) if matches!(c.to_ascii_uppercase(), 'A'..='G') => {}
        _ => return false,
    }
    while let Some(&c) = chars.peek() {
        if c == '#' || c == 'b' {
            chars.next();
        } else {
            break;
        }
    }
    let octave: String = chars.collect();
    if octave.is_empty() {
        return true;
    }
    let digits = octave.strip_prefix('-').unwrap_or(&octave);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn check_suffix(token: &LocatedToken, parts: &TokenParts, out: &mut Vec<Diagnostic>) {
    let (label, text) = match parts.suffix {
        Suffix::None => return,
        Suffix::Denominator(d) => ("Denominator", d),
        Suffix::Multiplier(m) => ("Multiplier", m),
    };

    match parse_float(text) {
        None => out.push(Diagnostic::warning(
            token,
            format!("{} '{}' is not a number; duration defaults to 1", label, text),
        )),
        Some(v) if v == 0.0 && matches!(parts.suffix, Suffix::Denominator(_)) => {
            out.push(Diagnostic::warning(
                token,
                "Denominator 0 gives an infinite duration".to_string(),
            ))
        }
        Some(_) if parts.duration() < 0.0 => out.push(Diagnostic::warning(
            token,
            format!("Negative duration {}", parts.duration()),
        )),
        Some(_) => {}
    }
}

fn check_token(token: &LocatedToken, out: &mut Vec<Diagnostic>) {
    if token.text == BARLINE {
        return;
    }
    let parts = TokenParts::split(token.text);
    check_suffix(token, &parts, out);

    let name = parts.name;
    if name.is_empty() {
        out.push(Diagnostic::warning(token, "Missing pitch name".to_string()));
    } else if !(is_start_name(name) || is_pause_name(name) || is_pitch_name(name)) {
        out.push(Diagnostic::warning(
            token,
            format!("Unknown pitch '{}'", name),
        ));
    }
}

/// Report every token the parser would silently default.
pub fn lint(song: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for token in Lexer::new(song) {
        check_token(&token, &mut diagnostics);
    }
    diagnostics
}

/// Strict validation: the first diagnostic becomes an error.
pub fn validate(song: &str) -> Result<(), CardsError> {
    match lint(song).into_iter().next() {
        Some(d) => Err(CardsError::ParseError {
            line: d.line,
            column: d.column,
            message: d.message,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_song() {
        assert!(lint("C D/2 E*3 | pause G#3 Bb-1 start").is_empty());
        assert!(validate("C D E F").is_ok());
        assert!(validate("").is_ok());
    }

    #[test]
    fn test_bad_multiplier() {
        let d = lint("C D*x");
        assert_eq!(d.len(), 1);
        assert_eq!(d[0].line, 1);
        assert_eq!(d[0].column, 3);
        assert_eq!(d[0].end_column, 6);
        assert!(d[0].message.contains("Multiplier 'x'"));
    }

    #[test]
    fn test_empty_denominator() {
        let d = lint("C/");
        assert_eq!(d.len(), 1);
        assert!(d[0].message.starts_with("Denominator ''"));
    }

    #[test]
    fn test_zero_denominator() {
        let d = lint("C/0");
        assert_eq!(d.len(), 1);
        assert!(d[0].message.contains("infinite"));
    }

    #[test]
    fn test_negative_duration() {
        let d = lint("C*-2");
        assert_eq!(d.len(), 1);
        assert!(d[0].message.contains("Negative"));
    }

    #[test]
    fn test_missing_and_unknown_pitch() {
        let d = lint("/2 H Cx\nQ*2");
        assert_eq!(d.len(), 4);
        assert_eq!(d[0].message, "Missing pitch name");
        assert_eq!(d[1].message, "Unknown pitch 'H'");
        assert_eq!(d[2].message, "Unknown pitch 'Cx'");
        assert_eq!((d[3].line, d[3].column), (2, 1));
    }

    #[test]
    fn test_is_pitch_name() {
        assert!(is_pitch_name("C"));
        assert!(is_pitch_name("f#"));
        assert!(is_pitch_name("Bb3"));
        assert!(is_pitch_name("A##10"));
        assert!(is_pitch_name("E-1"));
        assert!(!is_pitch_name("H"));
        assert!(!is_pitch_name("C-"));
        assert!(!is_pitch_name("C4x"));
        assert!(!is_pitch_name(""));
    }

    #[test]
    fn test_validate_reports_first() {
        let err = validate("C D\nE*q F/z").unwrap_err();
        assert_eq!(
            err,
            CardsError::ParseError {
                line: 2,
                column: 1,
                message: "Multiplier 'q' is not a number; duration defaults to 1".to_string(),
            }
        );
    }
}
