//! Word lookup seam used by the page handlers.
//!
//! DESIGN
//! ======
//! Handlers depend on the `WordLookup` trait object held in `AppState`, so
//! route tests can swap in a canned implementation. `HttpLookup` is the
//! production implementation over the dictionary and Pexels APIs.
//!
//! TRADE-OFFS
//! ==========
//! Upstream failures are logged and collapsed to "no entry" / "no images".
//! A flaky dictionary API therefore reads as "no results" to the visitor,
//! which keeps the page usable at the cost of hiding the outage.

use super::{LookupError, dictionary, images};
use crate::config::SiteConfig;

pub use dictionary::WordEntry;

const USER_AGENT: &str = concat!("lexicon/", env!("CARGO_PKG_VERSION"));

#[async_trait::async_trait]
pub trait WordLookup: Send + Sync {
    /// Dictionary entry for `word`, or `None` when there is nothing to show.
    async fn define(&self, word: &str) -> Option<WordEntry>;

    /// Illustrative image URLs for `word`; empty when unavailable.
    async fn images(&self, word: &str) -> Vec<String>;
}

/// `WordLookup` over the public dictionary and Pexels HTTP APIs.
pub struct HttpLookup {
    client: reqwest::Client,
    dictionary_url: String,
    pexels_url: String,
    pexels_api_key: Option<String>,
    images_per_page: u32,
}

impl HttpLookup {
    /// Build the lookup client from site config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &SiteConfig) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.lookup_timeout)
            .build()
            .map_err(|e| LookupError::HttpClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            dictionary_url: config.dictionary_url.clone(),
            pexels_url: config.pexels_url.clone(),
            pexels_api_key: config.pexels_api_key.clone(),
            images_per_page: config.images_per_page,
        })
    }

    /// Whether image search is configured.
    #[must_use]
    pub fn images_enabled(&self) -> bool {
        self.pexels_api_key.is_some()
    }
}

#[async_trait::async_trait]
impl WordLookup for HttpLookup {
    async fn define(&self, word: &str) -> Option<WordEntry> {
        match dictionary::fetch(&self.client, &self.dictionary_url, word).await {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, %word, "dictionary lookup failed");
                None
            }
        }
    }

    async fn images(&self, word: &str) -> Vec<String> {
        let Some(api_key) = self.pexels_api_key.as_deref() else {
            return Vec::new();
        };
        match images::fetch(&self.client, &self.pexels_url, api_key, word, self.images_per_page).await {
            Ok(urls) => urls,
            Err(e) => {
                tracing::warn!(error = %e, %word, "image search failed");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
#[path = "lookup_test.rs"]
mod tests;
