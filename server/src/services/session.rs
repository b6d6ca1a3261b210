//! Visitor sessions: search history, favorites, and flash messages.
//!
//! ARCHITECTURE
//! ============
//! Sessions live in process memory keyed by a random token carried in an
//! HttpOnly cookie. Nothing is persisted; a restart forgets every visitor.
//!
//! TRADE-OFFS
//! ==========
//! Anyone can mint a session by sending a cookie, so idle sessions are
//! pruned whenever a session is created, from a fresh token or an unknown
//! one, to bound memory.

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use tokio::sync::RwLock;

/// Cookie carrying the session token.
pub const SESSION_COOKIE: &str = "lexicon_session";
/// Most recent searches kept per session.
pub const HISTORY_LIMIT: usize = 10;
/// Favorites kept per session.
pub const FAVORITES_LIMIT: usize = 50;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex session token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

// =============================================================================
// FLASH MESSAGES
// =============================================================================

/// Severity of a one-shot notice, used as its CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Warning,
    Danger,
}

impl FlashLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// A notice shown once on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

// =============================================================================
// SESSION DATA
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteChange {
    Added,
    Removed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionData {
    /// Searched words, most recent first.
    pub history: Vec<String>,
    /// Favorite words, most recently added first.
    pub favorites: Vec<String>,
    pub flashes: Vec<Flash>,
}

fn same_word(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

impl SessionData {
    /// Put `word` at the front of the history unless it is already there in
    /// any letter case. Returns whether the history changed.
    pub fn record_search(&mut self, word: &str) -> bool {
        if self.history.iter().any(|w| same_word(w, word)) {
            return false;
        }
        self.history.insert(0, word.to_owned());
        self.history.truncate(HISTORY_LIMIT);
        true
    }

    /// Remove `word` from favorites if present (any letter case), otherwise
    /// add it at the front.
    pub fn toggle_favorite(&mut self, word: &str) -> FavoriteChange {
        if self.is_favorite(word) {
            self.favorites.retain(|w| !same_word(w, word));
            FavoriteChange::Removed
        } else {
            self.favorites.insert(0, word.to_owned());
            self.favorites.truncate(FAVORITES_LIMIT);
            FavoriteChange::Added
        }
    }

    #[must_use]
    pub fn is_favorite(&self, word: &str) -> bool {
        self.favorites.iter().any(|w| same_word(w, word))
    }

    pub fn flash(&mut self, level: FlashLevel, message: impl Into<String>) {
        self.flashes.push(Flash { level, message: message.into() });
    }

    /// Drain queued flashes in the order they were added.
    pub fn take_flashes(&mut self) -> Vec<Flash> {
        std::mem::take(&mut self.flashes)
    }
}

// =============================================================================
// STORE
// =============================================================================

struct StoredSession {
    data: SessionData,
    last_seen: Instant,
}

/// Shared in-memory session map. Clone is cheap; clones share state.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, StoredSession>>>,
    max_idle: Duration,
}

impl SessionStore {
    /// Store whose sessions expire after `max_idle` without a request.
    #[must_use]
    pub fn new(max_idle: Duration) -> Self {
        Self { inner: Arc::default(), max_idle }
    }

    /// Run `f` against the session for `token`, creating it if needed, and
    /// mark the session as seen.
    ///
    /// Creating a session first drops every idle one, whether the token was
    /// freshly issued or arrived in an unknown cookie.
    pub async fn update<R>(&self, token: &str, f: impl FnOnce(&mut SessionData) -> R) -> R {
        let mut sessions = self.inner.write().await;
        if !sessions.contains_key(token) {
            let pruned = prune(&mut sessions, self.max_idle);
            if pruned > 0 {
                tracing::debug!(pruned, "dropped idle sessions");
            }
        }
        let session = sessions
            .entry(token.to_owned())
            .or_insert_with(|| StoredSession { data: SessionData::default(), last_seen: Instant::now() });
        session.last_seen = Instant::now();
        f(&mut session.data)
    }
}

fn prune(sessions: &mut HashMap<String, StoredSession>, max_idle: Duration) -> usize {
    let before = sessions.len();
    sessions.retain(|_, s| s.last_seen.elapsed() <= max_idle);
    before - sessions.len()
}

#[cfg(test)]
impl SessionStore {
    /// Drop sessions not seen within the idle window. Returns how many were
    /// dropped.
    pub async fn prune_idle(&self) -> usize {
        let mut sessions = self.inner.write().await;
        prune(&mut sessions, self.max_idle)
    }

    /// Copy of the session for `token`, if it exists.
    pub async fn get(&self, token: &str) -> Option<SessionData> {
        self.inner.read().await.get(token).map(|s| s.data.clone())
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
