//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the session store, the word lookup backend, and the cookie
//! flag handlers need at request time.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::services::lookup::WordLookup;
use crate::services::session::SessionStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub lookup: Arc<dyn WordLookup>,
    /// Set the `Secure` flag on the session cookie.
    pub cookie_secure: bool,
}

impl AppState {
    #[must_use]
    pub fn new(config: &SiteConfig, lookup: Arc<dyn WordLookup>) -> Self {
        Self {
            sessions: SessionStore::new(config.session_idle),
            lookup,
            cookie_secure: config.cookie_secure,
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn new_copies_request_time_config() {
        let config = SiteConfig {
            port: 5000,
            static_dir: PathBuf::from("static"),
            dictionary_url: String::new(),
            pexels_url: String::new(),
            pexels_api_key: None,
            images_per_page: 6,
            lookup_timeout: Duration::from_secs(8),
            cookie_secure: true,
            session_idle: Duration::from_secs(42),
        };
        let state = AppState::new(&config, Arc::new(test_helpers::MockLookup::default()));
        assert!(state.cookie_secure);
    }

    #[tokio::test]
    async fn clones_share_sessions() {
        let state = test_helpers::test_app_state(test_helpers::MockLookup::default());
        let clone = state.clone();
        state.sessions.update("t", |s| s.record_search("zenith")).await;
        assert_eq!(clone.sessions.len().await, 1);
    }
}
