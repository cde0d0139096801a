//! Shared application state for the Axum gateway.

use emissary_common::config::AppConfig;
use emissary_core::slack::SlackClient;

/// Application state shared across all route handlers via Axum `State`.
///
/// Nothing here is mutable — invocations stay independent and may be
/// processed in parallel without coordination.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub slack: SlackClient,
}

impl AppState {
    pub fn new(config: AppConfig, slack: SlackClient) -> Self {
        Self { config, slack }
    }
}
