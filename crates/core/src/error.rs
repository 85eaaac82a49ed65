use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Unified error type for the chat proxy pipeline.
///
/// Every failure surfaces to the caller as JSON, never as HTML.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// Inbound request carried no usable `apiKey`. No upstream call is made.
    #[error("Missing apiKey")]
    MissingApiKey,

    /// Upstream rejected the request; its status and body are relayed.
    #[error("upstream error (status {status})")]
    Upstream { status: u16, body: String },

    /// Anything else: malformed inbound JSON, network failure, timeout.
    #[error("{0}")]
    Internal(String),
}

impl ProxyError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingApiKey => StatusCode::BAD_REQUEST,
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Upstream error bodies that already are JSON pass through untouched.
        if let Self::Upstream { body, .. } = &self
            && serde_json::from_str::<serde_json::Value>(body).is_ok()
        {
            return (status, [("content-type", "application/json")], body.clone()).into_response();
        }

        let body = match self {
            Self::Upstream { body, .. } => json!({ "error": body }),
            other => json!({ "error": other.to_string() }),
        };

        (
            status,
            [("content-type", "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Internal(format!("request timed out: {e}"))
        } else {
            Self::Internal(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ProxyError {
    fn from(e: serde_json::Error) -> Self {
        Self::Internal(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn response_parts(error: ProxyError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read body");
        let value: Value = serde_json::from_slice(&body).expect("body is not JSON");
        (status, value)
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ProxyError::MissingApiKey.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ProxyError::Upstream {
                status: 429,
                body: String::new()
            }
            .status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            ProxyError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_invalid_upstream_status_falls_back_to_bad_gateway() {
        let error = ProxyError::Upstream {
            status: 42,
            body: String::new(),
        };
        assert_eq!(error.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_missing_api_key_envelope() {
        let (status, body) = response_parts(ProxyError::MissingApiKey).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "error": "Missing apiKey" }));
    }

    #[tokio::test]
    async fn test_upstream_json_body_passes_through() {
        let error = ProxyError::Upstream {
            status: 429,
            body: r#"{"error":{"type":"rate_limit"}}"#.to_string(),
        };
        let (status, body) = response_parts(error).await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body, serde_json::json!({ "error": { "type": "rate_limit" } }));
    }

    #[tokio::test]
    async fn test_upstream_raw_body_is_wrapped() {
        let error = ProxyError::Upstream {
            status: 503,
            body: "Service Unavailable".to_string(),
        };
        let (status, body) = response_parts(error).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body, serde_json::json!({ "error": "Service Unavailable" }));
    }

    #[tokio::test]
    async fn test_internal_error_uses_source_message() {
        let parse_error =
            serde_json::from_str::<Value>("{not json").expect_err("parse should fail");
        let (status, body) = response_parts(ProxyError::from(parse_error)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = body["error"].as_str().expect("error is not a string");
        assert!(!message.is_empty());
    }
}
