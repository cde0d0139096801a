//! The relay handler — one invocation, one outcome.
//!
//! Shared core for both hosting modes:
//! 1. Config check (Slack URL present) — short-circuits before any I/O
//! 2. Input check (payload non-blank)
//! 3. Parse into an `IssueNotification`
//! 4. Format the Slack message line
//! 5. Dispatch via `SlackClient`
//! 6. Map the result for the caller
//!
//! The gateway adapter lives in `emissary-gateway` (structured status +
//! JSON body); [`relay_event_plain`] is the plain-text adapter used by
//! direct invocation hosting.

use emissary_common::config::AppConfig;
use emissary_common::error::RelayError;

use crate::formatter::format_notification;
use crate::parser::parse_event;
use crate::slack::SlackClient;

/// Successful relay of one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayOutcome {
    /// Issue number the notification referred to, when the payload had one.
    pub issue_number: Option<u64>,
    /// The exact message line delivered to Slack.
    pub message_text: String,
}

impl RelayOutcome {
    /// Caller-visible success message.
    pub fn success_message(&self) -> String {
        let label = match self.issue_number {
            Some(n) => n.to_string(),
            None => "unknown".to_string(),
        };
        format!("Slack notification sent for issue #{label}.")
    }
}

/// Relay one raw webhook payload to Slack.
///
/// Stateless: every invocation is independent and may run concurrently with
/// any other. At most one outbound call is made, and only after the config
/// and input checks pass.
pub async fn relay_event(
    config: &AppConfig,
    slack: &SlackClient,
    raw: &str,
) -> Result<RelayOutcome, RelayError> {
    let Some(webhook_url) = config
        .slack_webhook_url
        .as_deref()
        .filter(|url| !url.trim().is_empty())
    else {
        tracing::error!("SLACK_URL is not configured; dropping event");
        return Err(RelayError::Config);
    };

    if raw.trim().is_empty() {
        tracing::warn!("received an empty payload");
        return Err(RelayError::EmptyPayload);
    }

    let notification = parse_event(raw.as_bytes()).inspect_err(|e| {
        tracing::warn!(error = %e, "payload rejected");
    })?;

    let message_text = format_notification(&notification);

    slack
        .post_message(webhook_url, &message_text)
        .await
        .inspect_err(|e| {
            tracing::error!(error = %e, "Slack dispatch failed");
        })?;

    tracing::info!(
        repository = %notification.repository_full_name,
        issue = %notification.issue_label(),
        "Slack notification delivered"
    );

    Ok(RelayOutcome {
        issue_number: notification.issue_number,
        message_text,
    })
}

/// Plain-text hosting adapter: every outcome — success and every error —
/// comes back as one descriptive string.
pub async fn relay_event_plain(config: &AppConfig, slack: &SlackClient, raw: &str) -> String {
    match relay_event(config, slack, raw).await {
        Ok(outcome) => outcome.success_message(),
        Err(e) => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_message_includes_the_number() {
        let outcome = RelayOutcome {
            issue_number: Some(42),
            message_text: String::new(),
        };
        assert_eq!(
            outcome.success_message(),
            "Slack notification sent for issue #42."
        );
    }

    #[test]
    fn success_message_falls_back_to_unknown() {
        let outcome = RelayOutcome {
            issue_number: None,
            message_text: String::new(),
        };
        assert_eq!(
            outcome.success_message(),
            "Slack notification sent for issue #unknown."
        );
    }
}
