//! Server-rendered HTML pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Markup is built with `maud` so every interpolated value is escaped. The
//! element ids and classes here are the contract the wasm page glue in the
//! `client` crate looks for: `#searchForm`, `#word`, `#searchBtn`,
//! `#spinner`, `#status`, `#darkToggle`, and `.images img`.

pub mod index;
pub mod layout;
pub mod result;

/// Path of the word page for `word`.
#[must_use]
pub fn word_path(word: &str) -> String {
    format!("/word/{}", urlencoding::encode(word))
}

#[cfg(test)]
#[path = "views_test.rs"]
mod tests;
