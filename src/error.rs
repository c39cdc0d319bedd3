//! # Error Types
//!
//! Parsing and layout never fail: malformed notation degrades to defaults.
//! The fallible edges of the crate are strict validation, settings files,
//! song book overrides and file IO, and all of them report a [`CardsError`].
//!
//! ## Usage
//! ```rust
//! use beatcards::{validate, CardsError};
//!
//! match validate("C D*x E") {
//!     Ok(()) => println!("clean"),
//!     Err(CardsError::ParseError { line, column, message }) => {
//!         eprintln!("{}:{}: {}", line, column, message);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CardsError {
    /// Strict-mode rejection of a token.
    ///
    /// # Example
    /// ```
    /// # use beatcards::CardsError;
    /// let err = CardsError::ParseError {
    ///     line: 2,
    ///     column: 5,
    ///     message: "Multiplier 'x' is not a number".to_string(),
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Parse error at line 2, column 5: Multiplier 'x' is not a number"
    /// );
    /// ```
    #[error("Parse error at line {line}, column {column}: {message}")]
    ParseError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Settings YAML could not be read.
    #[error("Invalid settings: {0}")]
    ConfigError(String),

    /// The user-editable song book blob could not be read.
    #[error("Invalid song book override: {0}")]
    Override(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Unknown song: {0}")]
    UnknownSong(String),
}

impl From<std::io::Error> for CardsError {
    fn from(e: std::io::Error) -> Self {
        CardsError::Io(e.to_string())
    }
}
