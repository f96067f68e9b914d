use reqwest::Client;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::kexp::models::PlayHistory;

/// Client for the KEXP legacy play-history API. Read-only and
/// unauthenticated; one GET per run.
pub struct KexpClient {
    http_client: Client,
    history_url: String,
}

impl KexpClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http_client: Client::new(),
            history_url: config.history_url.clone(),
        }
    }

    pub async fn fetch_history(&self) -> Result<PlayHistory> {
        debug!("Fetching play history from {}", self.history_url);

        let response = self.http_client.get(&self.history_url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::StationApi(format!(
                "History request failed ({}): {}",
                status, error_text
            )));
        }

        let body = response.text().await?;
        let history: PlayHistory = serde_json::from_str(&body)?;

        info!("Fetched {} play history entries", history.results.len());
        Ok(history)
    }
}
