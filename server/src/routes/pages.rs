//! Page handlers: index, word, search, favorite.
//!
//! Each handler resolves the visitor session from its cookie first and hands
//! the (possibly updated) jar back with the response, so a first visit
//! always leaves with a session cookie.

use axum::extract::{Form, Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;

use crate::services::session::{self, FavoriteChange, FlashLevel, SESSION_COOKIE};
use crate::services::word_of_day;
use crate::state::AppState;
use crate::views::{self, index::IndexView, result::ResultView};

#[derive(Debug, Deserialize)]
pub struct WordForm {
    #[serde(default)]
    word: String,
}

/// Token from the session cookie, or a fresh one added to the jar.
fn resolve_session(state: &AppState, jar: CookieJar) -> (CookieJar, String) {
    if let Some(token) = jar.get(SESSION_COOKIE).map(Cookie::value).filter(|t| !t.is_empty()) {
        let token = token.to_owned();
        return (jar, token);
    }

    let token = session::generate_token();
    let cookie = Cookie::build((SESSION_COOKIE, token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.cookie_secure);
    (jar.add(cookie), token)
}

/// `GET /`: search form, word of the day, history, and favorites.
pub async fn index(State(state): State<AppState>, jar: CookieJar) -> Response {
    let (jar, token) = resolve_session(&state, jar);
    let (flashes, history, favorites) = state
        .sessions
        .update(&token, |s| (s.take_flashes(), s.history.clone(), s.favorites.clone()))
        .await;

    let page = views::index::render(&IndexView {
        word_of_day: word_of_day::today(),
        history: &history,
        favorites: &favorites,
        flashes: &flashes,
    });
    (jar, Html(page.into_string())).into_response()
}

/// `GET /word/{word}`: definitions and images, or back to `/` when the
/// dictionary has nothing.
pub async fn word(State(state): State<AppState>, jar: CookieJar, Path(word): Path<String>) -> Response {
    let (jar, token) = resolve_session(&state, jar);

    let (entry, images) = tokio::join!(state.lookup.define(&word), state.lookup.images(&word));
    let Some(entry) = entry else {
        tracing::info!(%word, "no dictionary entry");
        state
            .sessions
            .update(&token, |s| s.flash(FlashLevel::Danger, format!("No results found for \"{word}\".")))
            .await;
        return (jar, Redirect::to("/")).into_response();
    };

    let (is_favorite, flashes) = state
        .sessions
        .update(&token, |s| (s.is_favorite(&word), s.take_flashes()))
        .await;

    let page = views::result::render(&ResultView {
        word: &word,
        entry: &entry,
        images: &images,
        is_favorite,
        flashes: &flashes,
    });
    (jar, Html(page.into_string())).into_response()
}

/// `POST /search`: record the word in history and go to its page.
pub async fn search(State(state): State<AppState>, jar: CookieJar, Form(form): Form<WordForm>) -> Response {
    let (jar, token) = resolve_session(&state, jar);
    let word = form.word.trim();

    if word.is_empty() {
        state
            .sessions
            .update(&token, |s| s.flash(FlashLevel::Warning, "Please enter a word to search."))
            .await;
        return (jar, Redirect::to("/")).into_response();
    }

    state.sessions.update(&token, |s| s.record_search(word)).await;
    (jar, Redirect::to(&views::word_path(word))).into_response()
}

/// `POST /favorite`: toggle the word in favorites and return to its page.
pub async fn favorite(State(state): State<AppState>, jar: CookieJar, Form(form): Form<WordForm>) -> Response {
    let (jar, token) = resolve_session(&state, jar);
    let word = form.word.trim();

    if word.is_empty() {
        state
            .sessions
            .update(&token, |s| s.flash(FlashLevel::Warning, "Missing word for favorites."))
            .await;
        return (jar, Redirect::to("/")).into_response();
    }

    state
        .sessions
        .update(&token, |s| {
            let message = match s.toggle_favorite(word) {
                FavoriteChange::Added => format!("Added \"{word}\" to favorites."),
                FavoriteChange::Removed => format!("Removed \"{word}\" from favorites."),
            };
            s.flash(FlashLevel::Success, message);
        })
        .await;
    (jar, Redirect::to(&views::word_path(word))).into_response()
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
