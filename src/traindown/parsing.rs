//! Parsing entry points
//!
//! [`parse_str`] and [`parse_bytes`] are the one-shot API: build a scanner with the default
//! markers, scan, then fold the tokens into a session. [`Parser`] does the same with a
//! configured scanner and a pluggable date interpreter, and can be reused across inputs.
//!
//! A parse fails only when the scanner cannot be built or the input cannot be tokenized.
//! Once tokens exist, building always succeeds and reports problems in `Session::errors`.

pub mod builder;

use crate::traindown::ast::Session;
use crate::traindown::config::{ScannerConfig, TraindownConfig};
use crate::traindown::dates::{ChronoDates, DateInterpreter};
use crate::traindown::error::ParseError;
use crate::traindown::lexing::Scanner;
use crate::traindown::token::Token;

pub use builder::{build_session, BuildState, Scope};

/// Parse traindown text with the default configuration.
pub fn parse_str(source: &str) -> Result<Session, ParseError> {
    Parser::new()?.parse_str(source)
}

/// Parse UTF-8 encoded traindown with the default configuration.
pub fn parse_bytes(source: &[u8]) -> Result<Session, ParseError> {
    Parser::new()?.parse_bytes(source)
}

/// A configured scanner paired with a date interpreter.
#[derive(Debug, Clone)]
pub struct Parser<D = ChronoDates> {
    scanner: Scanner,
    dates: D,
}

impl Parser {
    /// Parser with the default markers and [`ChronoDates`].
    pub fn new() -> Result<Self, ParseError> {
        Self::with_scanner_config(ScannerConfig::default())
    }

    pub fn from_config(config: &TraindownConfig) -> Result<Self, ParseError> {
        Self::with_scanner_config(config.scanner.clone())
    }

    pub fn with_scanner_config(config: ScannerConfig) -> Result<Self, ParseError> {
        Ok(Self {
            scanner: Scanner::new(config)?,
            dates: ChronoDates,
        })
    }
}

impl<D: DateInterpreter> Parser<D> {
    /// Swap the date interpreter, keeping the scanner.
    pub fn with_dates<E: DateInterpreter>(self, dates: E) -> Parser<E> {
        Parser {
            scanner: self.scanner,
            dates,
        }
    }

    /// Scan only, without building a session.
    pub fn tokens(&self, source: &str) -> Result<Vec<Token>, ParseError> {
        Ok(self.scanner.scan(source)?)
    }

    pub fn parse_str(&self, source: &str) -> Result<Session, ParseError> {
        let tokens = self.tokens(source)?;
        Ok(build_session(&tokens, &self.dates))
    }

    pub fn parse_bytes(&self, source: &[u8]) -> Result<Session, ParseError> {
        self.parse_str(std::str::from_utf8(source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traindown::dates::FixedClock;
    use crate::traindown::lexing::{ScanError, ScannerConfigError};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_parse_str_and_bytes_agree() {
        let source = "@ 2023-01-15\nSquat:\n  100 5r 3s\n";
        assert_eq!(parse_str(source), parse_bytes(source.as_bytes()));
    }

    #[test]
    fn test_invalid_utf8_is_fatal() {
        assert!(matches!(
            parse_bytes(&[b'S', 0xff, b':']),
            Err(ParseError::Encoding(_))
        ));
    }

    #[test]
    fn test_scan_failure_is_wrapped() {
        let err = parse_str("Squat:\nwhat is this").unwrap_err();
        assert_eq!(
            err,
            ParseError::Scan(ScanError::UnrecognizedLine {
                line: 2,
                text: "what is this".to_string()
            })
        );
        assert_eq!(
            err.to_string(),
            "failed to parse: line 2: unrecognized line \"what is this\""
        );
    }

    #[test]
    fn test_scanner_construction_failure() {
        let config = ScannerConfig {
            superset_marker: "#".to_string(),
            ..ScannerConfig::default()
        };
        assert!(matches!(
            Parser::with_scanner_config(config),
            Err(ParseError::Scanner(ScannerConfigError::AmbiguousMarkers { .. }))
        ));
    }

    #[test]
    fn test_parser_with_custom_dates() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let parser = Parser::new().unwrap().with_dates(FixedClock::new(now));
        let session = parser.parse_str("@ not a date").unwrap();
        assert_eq!(session.date, Some(now));
        assert_eq!(session.errors.len(), 1);
    }

    #[test]
    fn test_parser_is_reusable() {
        let parser = Parser::new().unwrap();
        let first = parser.parse_str("Squat:\n  100").unwrap();
        let second = parser.parse_str("Bench:\n  80").unwrap();
        assert_eq!(first.movements[0].name, "Squat");
        assert_eq!(second.movements[0].name, "Bench");
    }
}
