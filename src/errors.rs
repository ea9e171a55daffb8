use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::fmt;

/// Plain-text body returned when no acceptable address was found.
pub const RESOLUTION_FAILED_MESSAGE: &str = "Failed to retrieve detailed address";

/// Application-specific error types.
#[derive(Debug, Clone)]
pub enum AppError {
    /// Error interacting with an external API (transport, status or decode).
    ExternalApiError(String),
    /// No geocode passed the acceptance policy within the attempt bound.
    ResolutionExhausted {
        /// Region code the address was requested for.
        region: String,
        /// Number of geocoding attempts made.
        attempts: usize,
    },
    /// Internal server error.
    InternalError(String),
}

impl fmt::Display for AppError {
    /// Formats the error for display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ExternalApiError(msg) => write!(f, "External API error: {}", msg),
            AppError::ResolutionExhausted { region, attempts } => write!(
                f,
                "No detailed address found for {} after {} attempts",
                region, attempts
            ),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    /// Converts the error into a plain-text HTTP response.
    ///
    /// The page endpoint never renders a partial page, so every variant maps
    /// to a short text body.
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::ExternalApiError(msg) => {
                tracing::error!("External API error: {}", msg);
                (StatusCode::BAD_GATEWAY, "External service error")
            }
            AppError::ResolutionExhausted { region, attempts } => {
                tracing::error!(
                    "Address resolution exhausted for {} after {} attempts",
                    region,
                    attempts
                );
                (StatusCode::INTERNAL_SERVER_ERROR, RESOLUTION_FAILED_MESSAGE)
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/plain;charset=UTF-8")],
            body,
        )
            .into_response()
    }
}

impl From<reqwest::Error> for AppError {
    /// Converts a `reqwest::Error` into an `AppError`.
    fn from(err: reqwest::Error) -> Self {
        AppError::ExternalApiError(err.to_string())
    }
}
