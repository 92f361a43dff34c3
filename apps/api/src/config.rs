use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON profile dataset (top-level array of profiles).
    pub profiles_path: String,
    /// How many ranked results a match request returns by default.
    pub default_top_n: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            profiles_path: require_env("PROFILES_PATH")?,
            default_top_n: std::env::var("DEFAULT_TOP_N")
                .unwrap_or_else(|_| "5".to_string())
                .parse::<usize>()
                .context("DEFAULT_TOP_N must be a positive integer")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
