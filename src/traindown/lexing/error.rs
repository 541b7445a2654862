//! Error types for scanner construction and scanning

use thiserror::Error;

/// The marker table handed to [`Scanner::new`](super::Scanner::new) is unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScannerConfigError {
    #[error("{role} marker is empty")]
    EmptyMarker { role: &'static str },

    #[error("{role} marker {marker:?} contains reserved character {reserved:?}")]
    ReservedCharacter {
        role: &'static str,
        marker: String,
        reserved: char,
    },

    #[error("{first} marker {first_marker:?} is ambiguous with {second} marker {second_marker:?}")]
    AmbiguousMarkers {
        first: &'static str,
        first_marker: String,
        second: &'static str,
        second_marker: String,
    },
}

/// The input could not be tokenized. Scanning is all-or-nothing, so no tokens survive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("line {line}: unrecognized line {text:?}")]
    UnrecognizedLine { line: usize, text: String },

    #[error("line {line}: unexpected word {word:?} in performance")]
    UnexpectedWord { line: usize, word: String },

    #[error("line {line}: movement {text:?} is missing its closing ':'")]
    UnterminatedMovement { line: usize, text: String },

    #[error("line {line}: movement name is empty")]
    EmptyMovementName { line: usize },
}

impl ScanError {
    /// 1-based line the error was found on
    pub fn line(&self) -> usize {
        match self {
            ScanError::UnrecognizedLine { line, .. }
            | ScanError::UnexpectedWord { line, .. }
            | ScanError::UnterminatedMovement { line, .. }
            | ScanError::EmptyMovementName { line } => *line,
        }
    }
}
