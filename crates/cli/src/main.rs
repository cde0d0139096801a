//! Plain-text hosting binary.
//!
//! Reads one GitHub "issues" event payload from a file argument (or stdin
//! when no argument is given), relays it to Slack, and prints the handler's
//! descriptive result string. Every outcome — success and every error —
//! is a plain string on stdout; the exit code stays 0 for anything inside
//! the documented error taxonomy.

use std::io::Read;
use std::time::Duration;

use emissary_common::config::AppConfig;
use emissary_core::handler::relay_event_plain;
use emissary_core::slack::SlackClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "emissary_cli=info,emissary_core=info".into()),
        )
        .init();

    // Load configuration
    let config = AppConfig::from_env()?;
    let slack = SlackClient::new(Duration::from_secs(config.dispatch_timeout_secs))?;

    let raw = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let result = relay_event_plain(&config, &slack, &raw).await;
    println!("{result}");

    Ok(())
}
