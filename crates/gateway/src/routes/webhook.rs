//! Gateway-mode webhook endpoint.
//!
//! `POST /webhook` accepts the raw GitHub "issues" event body, relays it
//! through the shared handler core, and maps the outcome to the structured
//! response contract: 200 on success, 500 for missing configuration, 400
//! for missing/invalid input, 502 for a failed Slack dispatch — always with
//! a `{"message": <text>}` body.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::json;

use emissary_common::error::RelayError;
use emissary_core::handler::relay_event;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/webhook", post(receive_webhook))
}

/// Some gateway hosts hand the body over base64-encoded. A JSON payload
/// always starts with `{`, so anything else gets one decode attempt; if it
/// doesn't decode to UTF-8 the original body falls through to the parser,
/// which reports it as a payload error.
fn decode_body(raw: String) -> String {
    if raw.trim_start().starts_with('{') || raw.trim().is_empty() {
        return raw;
    }
    match BASE64.decode(raw.trim()).map(String::from_utf8) {
        Ok(Ok(decoded)) => decoded,
        _ => raw,
    }
}

/// POST /webhook — relay one GitHub issue event to Slack.
async fn receive_webhook(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<serde_json::Value>, RelayError> {
    let raw = decode_body(body);
    let outcome = relay_event(&state.config, &state.slack, &raw).await?;
    Ok(Json(json!({ "message": outcome.success_message() })))
}
