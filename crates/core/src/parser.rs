//! Payload parser for GitHub "issues" webhook events.
//!
//! Deserializes the raw request body into a strongly-typed mirror of the
//! event where every field is optional, then resolves defaults. Only
//! `issue.html_url` is required; everything else falls back to the
//! documented placeholder literals in `emissary_common::types`.

use serde::Deserialize;

use emissary_common::error::RelayError;
use emissary_common::types::{
    DEFAULT_ACTION, DEFAULT_REPOSITORY, DEFAULT_SENDER, DEFAULT_TITLE, IssueNotification,
};

/// Typed subset of the GitHub "issues" event. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct IssuesEvent {
    action: Option<String>,
    repository: Option<Repository>,
    issue: Option<Issue>,
    sender: Option<Sender>,
}

#[derive(Debug, Deserialize)]
struct Repository {
    full_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Issue {
    html_url: Option<String>,
    // Typed as Option<u64> so a non-integer number fails the whole parse
    // instead of being silently coerced.
    number: Option<u64>,
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Sender {
    login: Option<String>,
}

/// Parse a raw webhook body into an [`IssueNotification`].
///
/// Pure function from bytes to a notification or a `Payload` error; fails
/// when the buffer is not valid JSON, the `issue` field is absent, or
/// `issue.html_url` is absent/blank.
pub fn parse_event(raw: &[u8]) -> Result<IssueNotification, RelayError> {
    let event: IssuesEvent =
        serde_json::from_slice(raw).map_err(|e| RelayError::Payload(e.to_string()))?;

    let issue = event
        .issue
        .ok_or_else(|| RelayError::Payload("missing field `issue`".to_string()))?;

    let issue_url = issue
        .html_url
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| {
            RelayError::Payload("missing or blank field `issue.html_url`".to_string())
        })?;

    Ok(IssueNotification {
        issue_url,
        issue_title: issue.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        issue_number: issue.number,
        repository_full_name: event
            .repository
            .and_then(|r| r.full_name)
            .unwrap_or_else(|| DEFAULT_REPOSITORY.to_string()),
        action: event.action.unwrap_or_else(|| DEFAULT_ACTION.to_string()),
        sender: event
            .sender
            .and_then(|s| s.login)
            .unwrap_or_else(|| DEFAULT_SENDER.to_string()),
    })
}
