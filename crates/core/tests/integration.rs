//! Integration tests for the relay handler.
//!
//! Uses `mockito` as the stub Slack endpoint so dispatch behavior — and the
//! absence of dispatch on short-circuit paths — can be asserted via mock
//! hit counts.

use mockito::Matcher;

use emissary_common::config::AppConfig;
use emissary_common::error::RelayError;
use emissary_core::handler::{relay_event, relay_event_plain};
use emissary_core::slack::SlackClient;

// ============================================================
// Helpers
// ============================================================

const HAPPY_PAYLOAD: &str = r#"{
    "action": "opened",
    "repository": { "full_name": "octo-org/octo-repo" },
    "issue": {
        "html_url": "https://github.com/octo-org/octo-repo/issues/42",
        "number": 42,
        "title": "Bug report"
    },
    "sender": { "login": "octocat" }
}"#;

fn test_config(slack_url: Option<String>) -> AppConfig {
    AppConfig {
        slack_webhook_url: slack_url,
        bind_addr: "127.0.0.1:0".to_string(),
        dispatch_timeout_secs: 5,
    }
}

fn slack_client() -> SlackClient {
    SlackClient::new(std::time::Duration::from_secs(5)).unwrap()
}

// ============================================================
// Handler outcomes
// ============================================================

#[tokio::test]
async fn happy_path_delivers_and_reports_the_issue_number() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/hook")
        .match_header("content-type", "application/json")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("octo-org/octo-repo".to_string()),
            Matcher::Regex("https://github.com/octo-org/octo-repo/issues/42".to_string()),
        ]))
        .with_status(200)
        .with_body("ok")
        .create_async()
        .await;

    let config = test_config(Some(format!("{}/hook", server.url())));
    let outcome = relay_event(&config, &slack_client(), HAPPY_PAYLOAD)
        .await
        .unwrap();

    assert!(outcome.success_message().contains("Slack notification sent"));
    assert_eq!(outcome.issue_number, Some(42));
    mock.assert_async().await;
}

#[tokio::test]
async fn missing_config_short_circuits_without_dispatch() {
    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("POST", "/hook").expect(0).create_async().await;

    let config = test_config(None);
    let err = relay_event(&config, &slack_client(), HAPPY_PAYLOAD)
        .await
        .unwrap_err();

    assert!(matches!(err, RelayError::Config));
    mock.assert_async().await;
}

#[tokio::test]
async fn blank_config_counts_as_missing() {
    let config = test_config(Some("   ".to_string()));
    let err = relay_event(&config, &slack_client(), HAPPY_PAYLOAD)
        .await
        .unwrap_err();
    assert!(matches!(err, RelayError::Config));
}

#[tokio::test]
async fn empty_payload_short_circuits_without_dispatch() {
    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("POST", "/hook").expect(0).create_async().await;

    let config = test_config(Some(format!("{}/hook", server.url())));
    let err = relay_event(&config, &slack_client(), "  \n")
        .await
        .unwrap_err();

    assert!(matches!(err, RelayError::EmptyPayload));
    mock.assert_async().await;
}

#[tokio::test]
async fn malformed_payload_short_circuits_without_dispatch() {
    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("POST", "/hook").expect(0).create_async().await;

    let config = test_config(Some(format!("{}/hook", server.url())));
    let err = relay_event(&config, &slack_client(), "{\"zen\": \"Design for failure.\"}")
        .await
        .unwrap_err();

    assert!(matches!(err, RelayError::Payload(_)));
    mock.assert_async().await;
}

#[tokio::test]
async fn downstream_failure_surfaces_status_and_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/hook")
        .with_status(500)
        .with_body("no_service")
        .create_async()
        .await;

    let config = test_config(Some(format!("{}/hook", server.url())));
    let err = relay_event(&config, &slack_client(), HAPPY_PAYLOAD)
        .await
        .unwrap_err();

    match err {
        RelayError::Dispatch { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "no_service");
        }
        other => panic!("expected dispatch error, got {other:?}"),
    }
}

// ============================================================
// Plain-text adapter
// ============================================================

#[tokio::test]
async fn plain_mode_renders_success_as_text() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/hook")
        .with_status(200)
        .create_async()
        .await;

    let config = test_config(Some(format!("{}/hook", server.url())));
    let result = relay_event_plain(&config, &slack_client(), HAPPY_PAYLOAD).await;
    assert_eq!(result, "Slack notification sent for issue #42.");
}

#[tokio::test]
async fn plain_mode_renders_errors_as_text() {
    let config = test_config(None);
    let result = relay_event_plain(&config, &slack_client(), HAPPY_PAYLOAD).await;
    assert_eq!(result, "Missing SLACK_URL environment variable.");

    let config = test_config(Some("http://127.0.0.1:1/hook".to_string()));
    let result = relay_event_plain(&config, &slack_client(), "").await;
    assert_eq!(result, "No payload supplied.");
}
