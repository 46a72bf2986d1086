use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::{LlmSettings, DEFAULT_API_URL, DEFAULT_MODEL};

const DEFAULT_LLM_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm_api_url: String,
    pub llm_api_key: String,
    pub llm_model: String,
    pub llm_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let llm_timeout_secs = std::env::var("LLM_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_LLM_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Config {
            llm_api_url: std::env::var("LLM_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            llm_api_key: require_env("LLM_API_KEY")?,
            llm_model: std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            llm_timeout: Duration::from_secs(llm_timeout_secs),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn llm_settings(&self) -> LlmSettings {
        LlmSettings {
            api_url: self.llm_api_url.clone(),
            api_key: self.llm_api_key.clone(),
            model: self.llm_model.clone(),
            timeout: self.llm_timeout,
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
