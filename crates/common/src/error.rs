use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Error taxonomy for a single relay invocation.
///
/// Every variant is recovered locally and turned into a descriptive result;
/// none propagate as an unhandled fault. The `Display` texts double as the
/// caller-visible messages in both hosting modes.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Slack webhook URL missing or blank. No outbound call is made.
    #[error("Missing SLACK_URL environment variable.")]
    Config,

    /// Request carried no payload. No outbound call is made.
    #[error("No payload supplied.")]
    EmptyPayload,

    /// Payload was not a usable GitHub "issues" event.
    #[error("Invalid GitHub webhook payload: {0}")]
    Payload(String),

    /// Slack rejected the dispatch, or the request never completed.
    ///
    /// `status` is the downstream HTTP status code, or 0 when the request
    /// failed at the transport level (timeout, connection refused).
    #[error("Slack webhook returned {status}: {body}")]
    Dispatch { status: u16, body: String },
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = match &self {
            RelayError::Config => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::EmptyPayload => StatusCode::BAD_REQUEST,
            RelayError::Payload(_) => StatusCode::BAD_REQUEST,
            RelayError::Dispatch { .. } => StatusCode::BAD_GATEWAY,
        };

        let body = json!({ "message": self.to_string() });
        (status, Json(body)).into_response()
    }
}
