//! IssueEmissary gateway binary entrypoint.

use std::time::Duration;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use emissary_common::config::AppConfig;
use emissary_core::slack::SlackClient;

use emissary_gateway::routes::create_router;
use emissary_gateway::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("emissary_gateway=debug,emissary_core=debug,tower_http=debug")
        }))
        .init();

    tracing::info!("Starting IssueEmissary gateway...");

    // Load configuration
    let config = AppConfig::from_env()?;
    if config.slack_webhook_url.is_none() {
        // Not fatal: the contract reports this per invocation instead.
        tracing::warn!("SLACK_URL is not set; every relay will answer 500");
    }

    // Build the outbound Slack client once; it is shared across invocations.
    let slack = SlackClient::new(Duration::from_secs(config.dispatch_timeout_secs))?;

    // Build application state
    let bind_addr = config.bind_addr.clone();
    let state = AppState::new(config, slack);

    // Build router
    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Start server
    tracing::info!("Gateway listening on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
