use serde::{Deserialize, Serialize};

/// Default title when the issue carries none.
pub const DEFAULT_TITLE: &str = "(no title)";

/// Default repository name when the payload carries none.
pub const DEFAULT_REPOSITORY: &str = "unknown repository";

/// Default action verb when the payload carries none.
pub const DEFAULT_ACTION: &str = "updated";

/// Default sender login when the payload carries none.
pub const DEFAULT_SENDER: &str = "someone";

/// Fields extracted from a GitHub "issues" webhook event, ready for
/// formatting and delivery.
///
/// Constructed fresh per invocation and never shared across invocations;
/// the relay keeps no state of any kind between events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueNotification {
    /// Link to the issue. The only required field.
    pub issue_url: String,
    /// Issue title, or [`DEFAULT_TITLE`].
    pub issue_title: String,
    /// Issue number. Absence is distinct from zero.
    pub issue_number: Option<u64>,
    /// `owner/repo`, or [`DEFAULT_REPOSITORY`].
    pub repository_full_name: String,
    /// Event action (`opened`, `closed`, ...), or [`DEFAULT_ACTION`].
    pub action: String,
    /// Login of the user who triggered the event, or [`DEFAULT_SENDER`].
    pub sender: String,
}

impl IssueNotification {
    /// Label used for the issue in rendered text: `#<n>`, or `Issue` when
    /// the number is absent.
    pub fn issue_label(&self) -> String {
        match self.issue_number {
            Some(n) => format!("#{n}"),
            None => "Issue".to_string(),
        }
    }
}
