//! The line scanner
//!
//! [`Scanner::scan`] walks the source one line at a time and classifies each trimmed line by
//! its marker or its shape (see the [module docs](super) for the order). Value extraction
//! happens here: markers, keywords and the movement colon are stripped and the remainder is
//! trimmed. Values are otherwise passed through untouched, so a metadata token still holds
//! the whole `key: value` text.

use crate::traindown::config::ScannerConfig;
use crate::traindown::lexing::error::{ScanError, ScannerConfigError};
use crate::traindown::lexing::words::lex_performance;
use crate::traindown::token::{Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

const RESERVED: [char; 3] = [':', '.', '%'];

static KEYWORD_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?i)(date|fails|load|metadata|meta|movement|superset|note|reps|sets|unit|percent)",
        r"\s*:\s*(\S.*)$",
    ))
    .expect("keyword line pattern is valid")
});

fn keyword_kind(keyword: &str) -> Option<TokenKind> {
    let kind = match keyword.to_ascii_lowercase().as_str() {
        "date" => TokenKind::Date,
        "fails" => TokenKind::Fails,
        "load" => TokenKind::Load,
        "metadata" | "meta" => TokenKind::Metadata,
        "movement" => TokenKind::Movement,
        "superset" => TokenKind::MovementSuperset,
        "note" => TokenKind::Note,
        "reps" => TokenKind::Reps,
        "sets" => TokenKind::Sets,
        "unit" => TokenKind::Unit,
        "percent" => TokenKind::PercentOfMax,
        _ => return None,
    };
    Some(kind)
}

/// Tokenizes traindown source.
///
/// A scanner is immutable once built, so one instance can serve any number of scans.
#[derive(Debug, Clone)]
pub struct Scanner {
    config: ScannerConfig,
}

impl Scanner {
    /// Build a scanner from a marker table, rejecting tables that would make line
    /// classification ambiguous.
    pub fn new(config: ScannerConfig) -> Result<Self, ScannerConfigError> {
        validate_markers(&config)?;
        Ok(Self { config })
    }

    /// Build a scanner with the default markers.
    pub fn standard() -> Self {
        Self {
            config: ScannerConfig::default(),
        }
    }

    /// Tokenize the whole source. Either every line is tokenized or the scan fails.
    pub fn scan(&self, source: &str) -> Result<Vec<Token>, ScanError> {
        let mut tokens = Vec::new();

        for (index, raw) in source.lines().enumerate() {
            let text = raw.trim();
            if text.is_empty() {
                continue;
            }
            self.scan_line(text, index + 1, &mut tokens)?;
        }

        tracing::debug!(tokens = tokens.len(), "scanned traindown source");
        Ok(tokens)
    }

    fn scan_line(&self, text: &str, line: usize, tokens: &mut Vec<Token>) -> Result<(), ScanError> {
        let simple_markers = [
            (&self.config.comment_marker, TokenKind::Comment),
            (&self.config.date_marker, TokenKind::Date),
            (&self.config.metadata_marker, TokenKind::Metadata),
            (&self.config.note_marker, TokenKind::Note),
        ];

        for (marker, kind) in simple_markers {
            if let Some(rest) = text.strip_prefix(marker.as_str()) {
                tokens.push(Token::new(kind, rest.trim()).at_line(line));
                return Ok(());
            }
        }

        if let Some(rest) = text.strip_prefix(self.config.superset_marker.as_str()) {
            let rest = rest.trim();
            let name = rest
                .strip_suffix(':')
                .ok_or_else(|| ScanError::UnterminatedMovement {
                    line,
                    text: text.to_owned(),
                })?;
            tokens.push(movement_token(TokenKind::MovementSuperset, name, line)?);
            return Ok(());
        }

        if self.config.keyword_lines {
            if let Some(captures) = KEYWORD_LINE.captures(text) {
                if let Some(kind) = keyword_kind(&captures[1]) {
                    tokens.push(Token::new(kind, captures[2].trim()).at_line(line));
                    return Ok(());
                }
            }
        }

        if let Some(name) = text.strip_suffix(':') {
            tokens.push(movement_token(TokenKind::Movement, name, line)?);
            return Ok(());
        }

        if text.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
            tokens.extend(lex_performance(text, line)?);
            return Ok(());
        }

        Err(ScanError::UnrecognizedLine {
            line,
            text: text.to_owned(),
        })
    }
}

fn movement_token(kind: TokenKind, name: &str, line: usize) -> Result<Token, ScanError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ScanError::EmptyMovementName { line });
    }
    Ok(Token::new(kind, name).at_line(line))
}

fn validate_markers(config: &ScannerConfig) -> Result<(), ScannerConfigError> {
    let markers = [
        ("comment", &config.comment_marker),
        ("date", &config.date_marker),
        ("metadata", &config.metadata_marker),
        ("note", &config.note_marker),
        ("superset", &config.superset_marker),
    ];

    for (role, marker) in markers {
        if marker.is_empty() {
            return Err(ScannerConfigError::EmptyMarker { role });
        }
        if let Some(reserved) = marker
            .chars()
            .find(|c| c.is_alphanumeric() || c.is_whitespace() || RESERVED.contains(c))
        {
            return Err(ScannerConfigError::ReservedCharacter {
                role,
                marker: marker.clone(),
                reserved,
            });
        }
    }

    for (i, (first, first_marker)) in markers.iter().enumerate() {
        for (second, second_marker) in &markers[i + 1..] {
            if first_marker.starts_with(second_marker.as_str())
                || second_marker.starts_with(first_marker.as_str())
            {
                return Err(ScannerConfigError::AmbiguousMarkers {
                    first: *first,
                    first_marker: (*first_marker).clone(),
                    second: *second,
                    second_marker: (*second_marker).clone(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(source: &str) -> Vec<(TokenKind, String)> {
        Scanner::standard()
            .scan(source)
            .expect("source to scan")
            .into_iter()
            .map(|token| (token.kind(), token.value().to_owned()))
            .collect()
    }

    fn pair(kind: TokenKind, value: &str) -> (TokenKind, String) {
        (kind, value.to_string())
    }

    #[test]
    fn test_marker_lines() {
        assert_eq!(
            scan("@ 2023-01-15\n# unit: kg\n* easy day\n// warmup skipped"),
            vec![
                pair(TokenKind::Date, "2023-01-15"),
                pair(TokenKind::Metadata, "unit: kg"),
                pair(TokenKind::Note, "easy day"),
                pair(TokenKind::Comment, "warmup skipped"),
            ]
        );
    }

    #[test]
    fn test_movement_lines() {
        assert_eq!(
            scan("Back Squat:\n+ Pull up:\n+Dips :"),
            vec![
                pair(TokenKind::Movement, "Back Squat"),
                pair(TokenKind::MovementSuperset, "Pull up"),
                pair(TokenKind::MovementSuperset, "Dips"),
            ]
        );
    }

    #[test]
    fn test_keyword_lines() {
        assert_eq!(
            scan("DATE: 2023-01-15\nMOVEMENT: Squat\nLOAD: 100\nreps: 5\nSets : 3\nMETA: rpe: 8"),
            vec![
                pair(TokenKind::Date, "2023-01-15"),
                pair(TokenKind::Movement, "Squat"),
                pair(TokenKind::Load, "100"),
                pair(TokenKind::Reps, "5"),
                pair(TokenKind::Sets, "3"),
                pair(TokenKind::Metadata, "rpe: 8"),
            ]
        );
    }

    #[test]
    fn test_superset_and_meta_keywords() {
        assert_eq!(
            scan("superset: Row
meta: rpe: 8
Metadata: unit: kg"),
            vec![
                pair(TokenKind::MovementSuperset, "Row"),
                pair(TokenKind::Metadata, "rpe: 8"),
                pair(TokenKind::Metadata, "unit: kg"),
            ]
        );
    }

    #[test]
    fn test_keyword_values_are_not_validated() {
        assert_eq!(scan("REPS: abc"), vec![pair(TokenKind::Reps, "abc")]);
    }

    #[test]
    fn test_keyword_without_value_is_a_movement() {
        assert_eq!(scan("Load:"), vec![pair(TokenKind::Movement, "Load")]);
    }

    #[test]
    fn test_performance_line() {
        assert_eq!(
            scan("  135 5r 3s 1f"),
            vec![
                pair(TokenKind::Load, "135"),
                pair(TokenKind::Reps, "5"),
                pair(TokenKind::Sets, "3"),
                pair(TokenKind::Fails, "1"),
            ]
        );
    }

    #[test]
    fn test_blank_lines_and_crlf() {
        assert_eq!(
            scan("\r\n\nSquat:\r\n   \n  100\r\n"),
            vec![pair(TokenKind::Movement, "Squat"), pair(TokenKind::Load, "100")]
        );
    }

    #[test]
    fn test_line_numbers() {
        let tokens = Scanner::standard().scan("\nSquat:\n\n  100 5r").unwrap();
        let lines: Vec<usize> = tokens.iter().map(Token::line).collect();
        assert_eq!(lines, vec![2, 4, 4]);
    }

    #[test]
    fn test_unrecognized_line() {
        assert_eq!(
            Scanner::standard().scan("Squat:\nfelt good"),
            Err(ScanError::UnrecognizedLine {
                line: 2,
                text: "felt good".to_string()
            })
        );
    }

    #[test]
    fn test_unterminated_superset() {
        assert_eq!(
            Scanner::standard().scan("+ Pull up"),
            Err(ScanError::UnterminatedMovement {
                line: 1,
                text: "+ Pull up".to_string()
            })
        );
    }

    #[test]
    fn test_empty_movement_name() {
        assert_eq!(
            Scanner::standard().scan("Squat:\n  :"),
            Err(ScanError::EmptyMovementName { line: 2 })
        );
        assert_eq!(
            Scanner::standard().scan("+ :"),
            Err(ScanError::EmptyMovementName { line: 1 })
        );
    }

    #[test]
    fn test_keyword_lines_can_be_disabled() {
        let scanner = Scanner::new(ScannerConfig {
            keyword_lines: false,
            ..ScannerConfig::default()
        })
        .unwrap();
        assert!(matches!(
            scanner.scan("LOAD: 100"),
            Err(ScanError::UnrecognizedLine { line: 1, .. })
        ));
    }

    #[test]
    fn test_custom_markers() {
        let scanner = Scanner::new(ScannerConfig {
            note_marker: "!".to_string(),
            comment_marker: ";".to_string(),
            ..ScannerConfig::default()
        })
        .unwrap();
        let tokens = scanner.scan("! note\n; comment").unwrap();
        assert_eq!(tokens[0].kind(), TokenKind::Note);
        assert_eq!(tokens[1].kind(), TokenKind::Comment);
    }

    #[test]
    fn test_standard_config_is_valid() {
        assert!(Scanner::new(ScannerConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_empty_marker() {
        let config = ScannerConfig {
            date_marker: String::new(),
            ..ScannerConfig::default()
        };
        assert_eq!(
            Scanner::new(config).unwrap_err(),
            ScannerConfigError::EmptyMarker { role: "date" }
        );
    }

    #[test]
    fn test_rejects_reserved_characters() {
        for marker in ["n", "7", ":", ".", "%", "- "] {
            let config = ScannerConfig {
                note_marker: marker.to_string(),
                ..ScannerConfig::default()
            };
            assert!(
                matches!(
                    Scanner::new(config),
                    Err(ScannerConfigError::ReservedCharacter { role: "note", .. })
                ),
                "marker {:?} should be rejected",
                marker
            );
        }
    }

    #[test]
    fn test_rejects_ambiguous_markers() {
        let config = ScannerConfig {
            comment_marker: "##".to_string(),
            ..ScannerConfig::default()
        };
        assert_eq!(
            Scanner::new(config).unwrap_err(),
            ScannerConfigError::AmbiguousMarkers {
                first: "comment",
                first_marker: "##".to_string(),
                second: "metadata",
                second_marker: "#".to_string(),
            }
        );
    }
}
