//! Site configuration parsed from environment variables.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en/";
pub const DEFAULT_PEXELS_API_URL: &str = "https://api.pexels.com/v1/search";
pub const DEFAULT_IMAGES_PER_PAGE: u32 = 6;
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 8;
pub const DEFAULT_SESSION_IDLE_SECS: u64 = 7 * 24 * 60 * 60;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    /// Directory served under `/static` (stylesheet and the wasm bundle).
    pub static_dir: PathBuf,
    pub dictionary_url: String,
    pub pexels_url: String,
    /// Image search is skipped when unset.
    pub pexels_api_key: Option<String>,
    pub images_per_page: u32,
    pub lookup_timeout: Duration,
    pub cookie_secure: bool,
    pub session_idle: Duration,
}

impl SiteConfig {
    /// Build typed site config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 5000
    /// - `STATIC_DIR`: default `<crate>/static`
    /// - `DICTIONARY_API_URL`, `PEXELS_API_URL`: public API endpoints
    /// - `PEXELS_API_KEY`: enables image search
    /// - `IMAGES_PER_PAGE`: default 6
    /// - `LOOKUP_TIMEOUT_SECS`: default 8
    /// - `COOKIE_SECURE`: default false
    /// - `SESSION_IDLE_SECS`: default 7 days
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            Err(_) => DEFAULT_PORT,
        };

        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"));

        let pexels_api_key = std::env::var("PEXELS_API_KEY")
            .ok()
            .map(|key| key.trim().to_owned())
            .filter(|key| !key.is_empty());

        Ok(Self {
            port,
            static_dir,
            dictionary_url: std::env::var("DICTIONARY_API_URL").unwrap_or_else(|_| DEFAULT_DICTIONARY_API_URL.into()),
            pexels_url: std::env::var("PEXELS_API_URL").unwrap_or_else(|_| DEFAULT_PEXELS_API_URL.into()),
            pexels_api_key,
            images_per_page: env_parse("IMAGES_PER_PAGE", DEFAULT_IMAGES_PER_PAGE),
            lookup_timeout: Duration::from_secs(env_parse("LOOKUP_TIMEOUT_SECS", DEFAULT_LOOKUP_TIMEOUT_SECS)),
            cookie_secure: env_bool("COOKIE_SECURE").unwrap_or(false),
            session_idle: Duration::from_secs(env_parse("SESSION_IDLE_SECS", DEFAULT_SESSION_IDLE_SECS)),
        })
    }
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
