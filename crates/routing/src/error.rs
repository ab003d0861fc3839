use std::error;
use std::fmt;

/// Errors surfaced by a routing provider. `Geocoding` and `Directions` carry
/// the provider's own message so the web layer can relay a distinguishable
/// 400 versus opaque 502 (§7).
#[derive(Debug)]
pub enum RoutingError {
    Geocoding(String),
    Directions(String),
    Request(reqwest::Error),
    Other(Box<dyn error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, RoutingError>;

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingError::Geocoding(msg) => write!(f, "geocoding failed: {msg}"),
            RoutingError::Directions(msg) => write!(f, "directions request failed: {msg}"),
            RoutingError::Request(err) => write!(f, "routing provider request failed: {err}"),
            RoutingError::Other(err) => write!(f, "{err}"),
        }
    }
}

impl error::Error for RoutingError {}

impl From<reqwest::Error> for RoutingError {
    fn from(err: reqwest::Error) -> Self {
        RoutingError::Request(err)
    }
}
