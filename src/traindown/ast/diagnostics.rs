//! Recoverable problems found while building a session
//!
//! A diagnostic never stops a parse. The field it concerns keeps its default (or prior)
//! value and building carries on with the next token.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// 1-based source line, 0 when the token was not read from text
    pub line: usize,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DiagnosticKind {
    #[error("failed to parse date {value:?} ({reason}), using the current time")]
    InvalidDate { value: String, reason: String },

    #[error("failed to parse {field} {value:?} as an integer")]
    InvalidInteger { field: String, value: String },

    #[error("failed to parse {field} {value:?} as a number")]
    InvalidFloat { field: String, value: String },

    #[error("metadata {value:?} has no ':' separator")]
    MalformedMetadata { value: String },
}

impl Diagnostic {
    pub fn new(line: usize, kind: DiagnosticKind) -> Self {
        Self { line, kind }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line > 0 {
            write!(f, "line {}: ", self.line)?;
        }
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for Diagnostic {}
