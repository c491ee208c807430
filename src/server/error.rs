use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub const INVALID_REQUEST_MESSAGE: &str = "Parameter tidak valid";

#[derive(Debug)]
pub enum ApiError {
    /// No recognizable operation in the query string.
    InvalidRequest,
    /// Fetch or parse failed; no finer classification.
    Upstream(anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::InvalidRequest => write!(f, "{}", INVALID_REQUEST_MESSAGE),
            ApiError::Upstream(err) => write!(f, "{:#}", err),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self { ApiError::Upstream(err) }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(error = %self, "upstream failure");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Context};

    #[test]
    fn invalid_request_is_400_with_fixed_message() {
        let err = ApiError::InvalidRequest;
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Parameter tidak valid");
    }

    #[test]
    fn upstream_message_keeps_the_cause_chain() {
        let cause: anyhow::Result<()> = Err(anyhow!("connection reset by peer"));
        let err = ApiError::from(cause.context("GET https://nekopoi.care").unwrap_err());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "GET https://nekopoi.care: connection reset by peer");
    }
}
