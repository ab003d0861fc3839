//! Routing provider boundary (§6.3): supplies total distance/drive-time and
//! per-leg breakdowns to the engine, and resolves addresses to coordinates.

pub mod error;
mod ors;
pub mod polyline;

use async_trait::async_trait;
use model::Coordinates;

pub use error::{Result, RoutingError};
pub use ors::OpenRouteServiceClient;

#[derive(Debug, Clone, PartialEq)]
pub struct LegSummary {
    pub distance_miles: f64,
    pub duration_minutes: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectionsResult {
    pub distance_miles: f64,
    pub duration_minutes: i64,
    pub geometry: String,
    pub legs: Vec<LegSummary>,
}

/// A source of geocoding and turn-by-turn directions. Kept behind a trait so
/// the web layer can swap providers without touching `hos_engine`.
#[async_trait]
pub trait RoutingProvider: Send + Sync {
    async fn geocode(&self, address: &str) -> Result<Coordinates>;
    async fn directions(&self, waypoints: &[Coordinates]) -> Result<DirectionsResult>;
}
