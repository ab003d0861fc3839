use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use database::DatabaseError;
use routing::RoutingError;
use serde::{Deserialize, Serialize};

pub type RouteResult<O> = Result<O, RouteErrorResponse>;

/// The uniform error body returned by every handler under `/api` (§7).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteErrorResponse {
    #[serde(skip)]
    pub status_code: StatusCode,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_uri: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RouteErrorResponse {
    pub fn new(status_code: StatusCode) -> Self {
        Self {
            status_code,
            http_method: None,
            requested_uri: None,
            message: None,
        }
    }

    pub fn with_method(mut self, method: &Method) -> Self {
        self.http_method = Some(method.to_string());
        self
    }

    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.requested_uri = Some(uri.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_default_message(self) -> Self {
        let message = self
            .status_code
            .canonical_reason()
            .unwrap_or("unknown error");
        self.with_message(message)
    }
}

/// A geocoding failure is the caller's fault (bad address); a directions
/// failure means the provider couldn't route between two otherwise-valid
/// points — neither is a server bug, so both stay out of the 5xx range.
impl From<RoutingError> for RouteErrorResponse {
    fn from(value: RoutingError) -> Self {
        match value {
            RoutingError::Geocoding(message) => {
                Self::new(StatusCode::BAD_REQUEST).with_message(message)
            }
            RoutingError::Directions(message) => {
                Self::new(StatusCode::BAD_GATEWAY).with_message(message)
            }
            RoutingError::Request(why) => {
                Self::new(StatusCode::BAD_GATEWAY).with_message(why.to_string())
            }
            RoutingError::Other(why) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR).with_message(why.to_string())
            }
        }
    }
}

impl From<DatabaseError> for RouteErrorResponse {
    fn from(value: DatabaseError) -> Self {
        match value {
            DatabaseError::NotFound => Self::new(StatusCode::NOT_FOUND)
                .with_message("the requested trip plan does not exist"),
            DatabaseError::Other(why) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR).with_message(why.to_string())
            }
        }
    }
}

impl IntoResponse for RouteErrorResponse {
    fn into_response(self) -> axum::response::Response {
        (self.status_code, Json(self)).into_response()
    }
}
