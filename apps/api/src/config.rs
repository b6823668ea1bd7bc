use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::nlp::tagger::DEFAULT_MAX_CHARS;

/// Application configuration loaded from environment variables.
/// Every variable is optional; unset ones fall back to `Config::default()`.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Request body limit, which bounds résumé uploads.
    pub max_upload_bytes: usize,
    /// JSON skill taxonomy replacing the built-in one.
    pub taxonomy_path: Option<PathBuf>,
    pub tagger_max_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            max_upload_bytes: 10 * 1024 * 1024,
            taxonomy_path: None,
            tagger_max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
            taxonomy_path: std::env::var("TAXONOMY_PATH").ok().map(PathBuf::from),
            tagger_max_chars: parse_env("TAGGER_MAX_CHARS", defaults.tagger_max_chars)?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid {}", std::any::type_name::<T>())),
        Err(_) => Ok(default),
    }
}
