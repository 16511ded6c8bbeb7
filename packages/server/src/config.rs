use anyhow::{Context, Result};
use dotenvy::dotenv;
use listings::normalize::truthy;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Base URL of a remote listings API. Unset (or empty) means the server
    /// serves only the built-in demo corpus.
    pub listings_api_base: Option<String>,
    /// Bearer token for the remote listings API, if it requires one.
    pub listings_api_key: Option<String>,
    /// Backfill missing vision tags on the corpus at startup. Accepts the
    /// same truthy spellings as the search flags (1/true/yes/on).
    pub vision_tagging: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            listings_api_base: env::var("LISTINGS_API_BASE")
                .ok()
                .filter(|value| !value.is_empty()),
            listings_api_key: env::var("LISTINGS_API_KEY")
                .ok()
                .filter(|value| !value.is_empty()),
            vision_tagging: env::var("VISION_TAGGING")
                .map(|value| truthy(&value))
                .unwrap_or(false),
        })
    }
}
