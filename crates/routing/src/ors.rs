use std::env;

use async_trait::async_trait;
use model::Coordinates;
use serde::Deserialize;

use crate::error::{Result, RoutingError};
use crate::{DirectionsResult, LegSummary, RoutingProvider};

const ORS_BASE_URL: &str = "https://api.openrouteservice.org";

/// Routing provider backed by OpenRouteService's REST API (geocoding via
/// `pelias_search`, directions via the `driving-hgv` profile).
pub struct OpenRouteServiceClient {
    api_key: String,
    http: reqwest::Client,
}

impl OpenRouteServiceClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Build a client from the `ROUTING_API_KEY` environment variable.
    pub fn from_env() -> Self {
        let api_key = env::var("ROUTING_API_KEY").expect(
            "ROUTING_API_KEY is not set. Get a free key at https://openrouteservice.org/dev/#/signup",
        );
        Self::new(api_key)
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    features: Vec<GeocodeFeature>,
}

#[derive(Debug, Deserialize)]
struct GeocodeFeature {
    geometry: GeocodeGeometry,
}

#[derive(Debug, Deserialize)]
struct GeocodeGeometry {
    coordinates: (f64, f64), // (lng, lat)
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Deserialize)]
struct DirectionsRoute {
    summary: DirectionsSummary,
    geometry: String,
    #[serde(default)]
    segments: Vec<DirectionsSegment>,
}

#[derive(Debug, Deserialize)]
struct DirectionsSummary {
    distance: f64,
    duration: f64,
}

#[derive(Debug, Deserialize)]
struct DirectionsSegment {
    distance: f64,
    duration: f64,
}

#[async_trait]
impl RoutingProvider for OpenRouteServiceClient {
    async fn geocode(&self, address: &str) -> Result<Coordinates> {
        let response = self
            .http
            .get(format!("{ORS_BASE_URL}/geocode/search"))
            .query(&[("api_key", self.api_key.as_str()), ("text", address)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RoutingError::Geocoding(format!(
                "ORS geocoding responded with {}",
                response.status()
            )));
        }

        let body: GeocodeResponse = response.json().await?;
        let feature = body
            .features
            .into_iter()
            .next()
            .ok_or_else(|| RoutingError::Geocoding(format!("could not geocode address: {address}")))?;

        let (lng, lat) = feature.geometry.coordinates;
        Ok(Coordinates::new(lat, lng))
    }

    async fn directions(&self, waypoints: &[Coordinates]) -> Result<DirectionsResult> {
        let coordinates: Vec<[f64; 2]> = waypoints.iter().map(|c| [c.lng, c.lat]).collect();

        let response = self
            .http
            .post(format!("{ORS_BASE_URL}/v2/directions/driving-hgv"))
            .header("Authorization", &self.api_key)
            .json(&serde_json::json!({
                "coordinates": coordinates,
                "units": "mi",
                "geometry": true,
                "instructions": false,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RoutingError::Directions(format!(
                "ORS directions responded with {}",
                response.status()
            )));
        }

        let body: DirectionsResponse = response.json().await?;
        let route = body
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| RoutingError::Directions("ORS returned no routes".into()))?;

        let legs = route
            .segments
            .into_iter()
            .map(|seg| LegSummary {
                distance_miles: seg.distance,
                duration_minutes: (seg.duration / 60.0) as i64,
            })
            .collect();

        Ok(DirectionsResult {
            distance_miles: route.summary.distance,
            duration_minutes: (route.summary.duration / 60.0) as i64,
            geometry: route.geometry,
            legs,
        })
    }
}
