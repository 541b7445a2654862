//! Session element, the root of a parse

use super::diagnostics::Diagnostic;
use super::metadata::Metadata;
use super::movement::Movement;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything recorded in one traindown log.
///
/// `errors` holds the recoverable problems found while building the session. A parse that
/// returned `Ok` may still have degraded fields, so callers should check it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Session {
    /// `None` until a date line is seen
    pub date: Option<DateTime<Utc>>,
    pub errors: Vec<Diagnostic>,
    pub movements: Vec<Movement>,
    pub metadata: Metadata,
    pub notes: Vec<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished movement, stamping its sequence.
    pub fn push_movement(&mut self, mut movement: Movement) {
        movement.sequence = self.movements.len() + 1;
        self.movements.push(movement);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// First movement with the given name
    pub fn movement(&self, name: &str) -> Option<&Movement> {
        self.movements.iter().find(|movement| movement.name == name)
    }
}
