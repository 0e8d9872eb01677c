use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => {
                tracing::debug!("Rejected request: {msg}");
                (StatusCode::BAD_REQUEST, msg.clone())
            }
        };

        let body = axum::Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

/// Why a single provider attempt did not produce listings.
/// Never surfaced to HTTP callers; the provider chain absorbs it.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("missing credential {0}")]
    MissingCredential(&'static str),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned {0}")]
    Status(reqwest::StatusCode),

    #[error("unexpected payload: {0}")]
    Payload(String),
}

impl ProviderError {
    /// A missing credential is a configuration skip, not a failed call.
    pub fn is_skip(&self) -> bool {
        matches!(self, ProviderError::MissingCredential(_))
    }
}
