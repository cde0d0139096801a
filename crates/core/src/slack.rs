//! Outbound Slack incoming-webhook dispatch.

use std::time::Duration;

use serde::Serialize;

use emissary_common::error::RelayError;

/// Body of the Slack incoming-webhook request.
#[derive(Debug, Serialize)]
struct SlackMessage<'a> {
    text: &'a str,
}

/// Thin client around `reqwest` for delivering one message per invocation.
///
/// Cheap to clone; the underlying connection pool is shared. A fixed
/// timeout bounds the single blocking point of the relay.
#[derive(Debug, Clone)]
pub struct SlackClient {
    http: reqwest::Client,
}

impl SlackClient {
    /// Build a client with the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    /// POST `{"text": <text>}` to the webhook URL.
    ///
    /// A non-2xx response or a transport failure (timeout included) maps to
    /// [`RelayError::Dispatch`]; transport failures carry status 0. One
    /// attempt, no retries.
    pub async fn post_message(&self, webhook_url: &str, text: &str) -> Result<(), RelayError> {
        let response = self
            .http
            .post(webhook_url)
            .json(&SlackMessage { text })
            .send()
            .await
            .map_err(|e| RelayError::Dispatch {
                status: 0,
                body: e.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(RelayError::Dispatch {
            status: status.as_u16(),
            body,
        })
    }
}
