//! Lexer module for the traindown format
//!
//! Traindown is line based: every non-blank line holds exactly one construct, chosen by its
//! leading marker or its shape. Scanning therefore happens in two layers.
//!
//! Line classification
//!
//!     Each trimmed line is classified in a fixed order. The marker characters are
//!     configurable (see [`ScannerConfig`](crate::traindown::config::ScannerConfig)); the
//!     defaults are shown here.
//!
//!         //  comment           -> Comment
//!         @   date              -> Date
//!         #   key: value        -> Metadata
//!         *   note              -> Note
//!         +   Name:             -> MovementSuperset
//!         KEYWORD: value        -> the keyword's kind (LOAD, REPS, NOTE, ...)
//!         Name:                 -> Movement
//!         135 5r 3s             -> performance words
//!
//!     Anything else cannot be tokenized and fails the whole scan.
//!
//! Performance words
//!
//!     Lines starting with a digit or a period are split into words by a logos lexer (see
//!     [words]). A word carries its own kind through its suffix: `5r` is reps, `3s` sets,
//!     `1f` fails, `85%` percent of max, and `100kg` a load followed by its unit.

pub mod error;
pub mod scanner;
pub mod words;

pub use error::{ScanError, ScannerConfigError};
pub use scanner::Scanner;
pub use words::{lex_performance, Word};
