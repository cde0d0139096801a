use serde::Deserialize;

/// Global application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Slack incoming-webhook URL notifications are delivered to.
    ///
    /// Kept as `Option` on purpose: a missing `SLACK_URL` is a
    /// per-invocation configuration error reported to the caller,
    /// never a startup crash.
    pub slack_webhook_url: Option<String>,

    /// Address the gateway binary binds to (default: 0.0.0.0:3000)
    pub bind_addr: String,

    /// Outbound request timeout in seconds for the Slack dispatch (default: 5)
    pub dispatch_timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            slack_webhook_url: std::env::var("SLACK_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            dispatch_timeout_secs: std::env::var("DISPATCH_TIMEOUT_SECS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("DISPATCH_TIMEOUT_SECS must be a valid u64"))?,
        })
    }
}
