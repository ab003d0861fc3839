use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::duty::DutyStatus;

/// A contiguous, half-open `[start, end)` block of global minutes carrying one
/// duty status. `miles` is nonzero only for `DutyStatus::Driving` blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub start: i64,
    pub end: i64,
    pub status: DutyStatus,
    pub label: String,
    pub miles: f64,
}

impl TimelineEvent {
    pub fn new(start: i64, end: i64, status: DutyStatus, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            status,
            label: label.into(),
            miles: 0.0,
        }
    }

    pub fn with_miles(mut self, miles: f64) -> Self {
        self.miles = miles;
        self
    }

    /// Length of the interval in minutes.
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}
