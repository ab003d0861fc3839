use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::duty::StopKind;

/// A point-like event on the global timeline: a fuel stop, a mandated break or
/// reset, or the pickup/dropoff itself. Always covered by exactly one
/// `TimelineEvent` of matching duration and the kind's prescribed duty status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StopEvent {
    pub kind: StopKind,
    pub global_minute: i64,
    pub duration: i64,
    pub label: String,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
}

impl StopEvent {
    pub fn new(kind: StopKind, global_minute: i64, duration: i64, label: impl Into<String>) -> Self {
        Self {
            kind,
            global_minute,
            duration,
            label: label.into(),
            lat: 0.0,
            lng: 0.0,
        }
    }

    pub fn with_coords(mut self, lat: f64, lng: f64) -> Self {
        self.lat = lat;
        self.lng = lng;
        self
    }

    /// A stop whose coordinates are still the engine's (0, 0) default — not
    /// yet populated at source (pickup/dropoff) or by the polyline interpolator.
    pub fn has_coords(&self) -> bool {
        self.lat != 0.0 || self.lng != 0.0
    }
}
