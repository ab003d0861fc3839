use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::duty::DutyStatus;

/// One intra-day slice of the global timeline, in minutes from that day's
/// midnight. A `DaySheet`'s segments are contiguous and sum to 1440.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub start_minute: i64,
    pub end_minute: i64,
    pub status: DutyStatus,
    pub location_label: String,
}

impl Segment {
    pub fn duration(&self) -> i64 {
        self.end_minute - self.start_minute
    }
}

/// A driver's log sheet for one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DaySheet {
    pub date: NaiveDate,
    pub segments: Vec<Segment>,
    pub total_miles: f64,
}
