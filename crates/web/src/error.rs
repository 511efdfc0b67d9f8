use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use osu_api::UpstreamError;
use serde_json::json;
use std::fmt;
use storage::error::StorageError;
use tracker::TrackerError;
use validator::ValidationErrors;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Tracker(TrackerError),
    Validation(ValidationErrors),
    BadRequest(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tracker(e) => write!(f, "{}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
        }
    }
}

impl WebError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Tracker(e) => match e {
                TrackerError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                TrackerError::PlayerNotFound(_) | TrackerError::PlayNotFound(_) => {
                    StatusCode::NOT_FOUND
                }
                TrackerError::Upstream(UpstreamError::InvalidQuery(_)) => StatusCode::BAD_REQUEST,
                TrackerError::Upstream(UpstreamError::Configuration(_)) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
                TrackerError::Upstream(_) => StatusCode::BAD_GATEWAY,
                TrackerError::Storage(StorageError::Unavailable(_)) => {
                    StatusCode::SERVICE_UNAVAILABLE
                }
                TrackerError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        let body = match &self {
            Self::Validation(errors) => {
                let field_errors: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            format!(
                                "{}: {}",
                                field,
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            )
                        })
                    })
                    .collect();

                json!({
                    "error": "Validation failed",
                    "details": field_errors
                })
            }
            Self::Tracker(TrackerError::Storage(e)) => {
                tracing::error!("Storage error: {:?}", e);
                json!({
                    "error": "An internal error occurred"
                })
            }
            Self::Tracker(TrackerError::Upstream(UpstreamError::MalformedResponse {
                body,
                reason,
            })) => {
                tracing::error!("Malformed upstream response ({}): {}", reason, body);
                json!({
                    "error": "The osu! API returned an unreadable response"
                })
            }
            Self::Tracker(e) if status_code.is_server_error() => {
                tracing::error!("Request failed: {}", e);
                json!({
                    "error": e.to_string()
                })
            }
            other => {
                json!({
                    "error": other.to_string()
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<TrackerError> for WebError {
    fn from(error: TrackerError) -> Self {
        Self::Tracker(error)
    }
}

impl From<UpstreamError> for WebError {
    fn from(error: UpstreamError) -> Self {
        Self::Tracker(TrackerError::Upstream(error))
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}
