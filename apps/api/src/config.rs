use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_file: PathBuf,
    pub upload_dir: PathBuf,
    pub admin_username: String,
    pub admin_password: String,
    pub session_ttl_minutes: i64,
    pub analyzer: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            data_file: env_or("DATA_FILE", "data.json").into(),
            upload_dir: env_or("UPLOAD_DIR", "uploads").into(),
            // Plaintext credential pair checked at login. A placeholder,
            // not a security boundary.
            admin_username: require_env("ADMIN_USERNAME")?,
            admin_password: require_env("ADMIN_PASSWORD")?,
            session_ttl_minutes: env_or("SESSION_TTL_MINUTES", "60")
                .parse::<i64>()
                .context("SESSION_TTL_MINUTES must be a number of minutes")?,
            analyzer: env_or("ANALYZER", "heuristic"),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
