//! Token definitions for the traindown format
//!
//! A token pairs a [`TokenKind`] with the raw text payload the scanner extracted for it.
//! Payloads are never interpreted here: `"abc"` is a perfectly good value for a `Reps`
//! token, and it is up to the session builder to report it.
//!
//! The builder acts on every kind except [`TokenKind::Comment`], which the scanner keeps so
//! that tooling can see the whole source. New kinds may be added as long as the builder
//! either handles them or ignores them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// All kinds of tokens the scanner can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    Date,
    Fails,
    Load,
    Metadata,
    Movement,
    MovementSuperset,
    Note,
    Reps,
    Sets,
    Unit,
    PercentOfMax,
    Comment,
}

impl TokenKind {
    /// Stable upper-case name, used by the token listing output
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Date => "DATE",
            TokenKind::Fails => "FAILS",
            TokenKind::Load => "LOAD",
            TokenKind::Metadata => "METADATA",
            TokenKind::Movement => "MOVEMENT",
            TokenKind::MovementSuperset => "MOVEMENT_SS",
            TokenKind::Note => "NOTE",
            TokenKind::Reps => "REPS",
            TokenKind::Sets => "SETS",
            TokenKind::Unit => "UNIT",
            TokenKind::PercentOfMax => "PERCENT_OF_MAX",
            TokenKind::Comment => "COMMENT",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified fragment of traindown source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    kind: TokenKind,
    value: String,
    line: usize,
}

impl Token {
    /// Create a token that is not tied to a source line.
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            line: 0,
        }
    }

    /// Attach the 1-based source line the token was read from.
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// 1-based source line, or 0 for tokens built by hand
    pub fn line(&self) -> usize {
        self.line
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.value)
    }
}
