//! Renders an [`IssueNotification`] into the single Slack message line.

use emissary_common::types::IssueNotification;

/// Render the one-line Slack summary for an issue event.
///
/// Shape: `[<repo>] <sender> <action> <label>: <<url>|<title>>` where
/// `<label>` is `#<n>` or the literal `Issue`, and `<<url>|<title>>` is
/// Slack's hyperlink markup. Pure and total; formatting the same
/// notification twice yields identical text.
pub fn format_notification(notification: &IssueNotification) -> String {
    format!(
        "[{}] {} {} {}: <{}|{}>",
        notification.repository_full_name,
        notification.sender,
        notification.action,
        notification.issue_label(),
        notification.issue_url,
        notification.issue_title,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(number: Option<u64>) -> IssueNotification {
        IssueNotification {
            issue_url: "https://github.com/octo-org/octo-repo/issues/42".into(),
            issue_title: "Bug report".into(),
            issue_number: number,
            repository_full_name: "octo-org/octo-repo".into(),
            action: "opened".into(),
            sender: "octocat".into(),
        }
    }

    #[test]
    fn renders_the_full_line() {
        assert_eq!(
            format_notification(&notification(Some(42))),
            "[octo-org/octo-repo] octocat opened #42: \
             <https://github.com/octo-org/octo-repo/issues/42|Bug report>"
        );
    }

    #[test]
    fn falls_back_to_issue_literal_without_a_number() {
        let line = format_notification(&notification(None));
        assert!(line.contains(" Issue: "));
    }

    #[test]
    fn always_embeds_the_slack_link_markup() {
        let n = notification(Some(7));
        let line = format_notification(&n);
        assert!(line.contains(&format!("<{}|{}>", n.issue_url, n.issue_title)));
    }

    #[test]
    fn formatting_is_idempotent() {
        let n = notification(Some(42));
        assert_eq!(format_notification(&n), format_notification(&n));
    }
}
