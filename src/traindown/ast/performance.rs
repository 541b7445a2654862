//! Performance element
//!
//! One set/rep/load entry of a movement. A performance written as just a load means one set
//! of one rep, hence the defaults of 1 for `reps` and `sets`.

use super::metadata::Metadata;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Performance {
    pub fails: i64,
    pub load: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_of_max: Option<f64>,
    pub reps: i64,
    pub sets: i64,
    /// 1-based position within the parent movement, set when the performance is appended
    pub sequence: usize,
    pub unit: String,
    pub metadata: Metadata,
    pub notes: Vec<String>,
}

impl Performance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total repetitions across all sets, saturating at the `i64` bounds
    pub fn volume_reps(&self) -> i64 {
        self.reps.saturating_mul(self.sets)
    }
}

impl Default for Performance {
    fn default() -> Self {
        Self {
            fails: 0,
            load: 0.0,
            percent_of_max: None,
            reps: 1,
            sets: 1,
            sequence: 0,
            unit: String::new(),
            metadata: Metadata::new(),
            notes: Vec::new(),
        }
    }
}
