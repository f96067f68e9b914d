use url::Url;

use crate::error::{AppError, Result};

pub const DEFAULT_HISTORY_URL: &str = "https://legacy-api.kexp.org/play/";
pub const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8080/callback";

#[derive(Debug, Clone)]
pub struct Config {
    pub spotify_refresh_token: String,
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
    pub spotify_username: String,
    pub spotify_redirect_uri: String,
    pub history_url: String,
    pub station_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let spotify_refresh_token = std::env::var("SPOTIFY_REFRESH_TOKEN")
            .map_err(|_| AppError::Config("SPOTIFY_REFRESH_TOKEN not set".into()))?;

        let spotify_client_id = std::env::var("SPOTIFY_CLIENT_ID")
            .map_err(|_| AppError::Config("SPOTIFY_CLIENT_ID not set".into()))?;

        let spotify_client_secret = std::env::var("SPOTIFY_CLIENT_SECRET")
            .map_err(|_| AppError::Config("SPOTIFY_CLIENT_SECRET not set".into()))?;

        let spotify_username = std::env::var("SPOTIFY_USERNAME")
            .map_err(|_| AppError::Config("SPOTIFY_USERNAME not set".into()))?;

        let spotify_redirect_uri = std::env::var("SPOTIFY_REDIRECT_URI")
            .unwrap_or_else(|_| DEFAULT_REDIRECT_URI.to_string());

        let history_url =
            std::env::var("KEXP_HISTORY_URL").unwrap_or_else(|_| DEFAULT_HISTORY_URL.to_string());

        Url::parse(&history_url)
            .map_err(|e| AppError::Config(format!("KEXP_HISTORY_URL is not a valid URL: {}", e)))?;

        let station_name =
            std::env::var("KEXP_STATION_NAME").unwrap_or_else(|_| "KEXP".to_string());

        Ok(Self {
            spotify_refresh_token,
            spotify_client_id,
            spotify_client_secret,
            spotify_username,
            spotify_redirect_uri,
            history_url,
            station_name,
        })
    }

    pub fn get_missing_config(&self) -> Vec<String> {
        let mut missing = Vec::new();

        if self.spotify_refresh_token.is_empty() {
            missing.push("SPOTIFY_REFRESH_TOKEN".to_string());
        }
        if self.spotify_client_id.is_empty() {
            missing.push("SPOTIFY_CLIENT_ID".to_string());
        }
        if self.spotify_client_secret.is_empty() {
            missing.push("SPOTIFY_CLIENT_SECRET".to_string());
        }
        if self.spotify_username.is_empty() {
            missing.push("SPOTIFY_USERNAME".to_string());
        }

        missing
    }

    pub fn validate_spotify_config(&self) -> bool {
        self.get_missing_config().is_empty()
    }

    /// Configuration for commands that only read the KEXP feed.
    /// No Spotify credentials required.
    pub fn station_only_from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            spotify_refresh_token: String::new(),
            spotify_client_id: String::new(),
            spotify_client_secret: String::new(),
            spotify_username: String::new(),
            spotify_redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
            history_url: std::env::var("KEXP_HISTORY_URL")
                .unwrap_or_else(|_| DEFAULT_HISTORY_URL.to_string()),
            station_name: std::env::var("KEXP_STATION_NAME")
                .unwrap_or_else(|_| "KEXP".to_string()),
        }
    }
}
