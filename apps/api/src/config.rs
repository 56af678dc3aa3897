use anyhow::{Context, Result};

use crate::post::ToneStyle;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub rust_log: String,
    /// Tone used for drafts rendered by the terminal host.
    pub default_tone: ToneStyle,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            default_tone: parse_tone(std::env::var("SHOWCASE_TONE").ok().as_deref())?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_tone(raw: Option<&str>) -> Result<ToneStyle> {
    match raw {
        None => Ok(ToneStyle::default()),
        Some(s) => s.parse().context("SHOWCASE_TONE must be a known tone style"),
    }
}
