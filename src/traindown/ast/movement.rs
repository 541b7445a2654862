//! Movement element

use super::metadata::Metadata;
use super::performance::Performance;
use serde::{Deserialize, Serialize};

/// One exercise block, possibly part of a superset with the movement before it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Movement {
    pub name: String,
    /// 1-based position within the session, set when the movement is appended
    pub sequence: usize,
    pub is_superset: bool,
    pub performances: Vec<Performance>,
    pub metadata: Metadata,
    pub notes: Vec<String>,
}

impl Movement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished performance, stamping its sequence.
    pub fn push_performance(&mut self, mut performance: Performance) {
        performance.sequence = self.performances.len() + 1;
        self.performances.push(performance);
    }

    /// The unnamed movement the builder starts with
    pub fn is_placeholder(&self) -> bool {
        self.name.is_empty()
    }
}
