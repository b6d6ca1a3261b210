//! # client
//!
//! WASM page glue for the lexicon search site.
//!
//! Three independent controllers attach to the server-rendered page:
//! search status feedback, the persisted light/dark theme, and the
//! staggered image reveal. Each controller is written against a small host
//! trait so it can run against the browser DOM (`hydrate` feature) or an
//! in-memory page in native tests.

pub mod image_reveal;
pub mod search_status;
pub mod theme;

#[cfg(feature = "hydrate")]
mod dom;

#[cfg(test)]
pub(crate) mod fake_page;

use std::rc::Rc;

/// Install every controller on `page`.
///
/// Elements the page does not carry are skipped; an empty page installs
/// nothing and returns normally.
pub fn install<P>(page: &Rc<P>)
where
    P: search_status::SearchHost + theme::ThemeHost + image_reveal::RevealHost + 'static,
{
    search_status::install(page);
    theme::install(page);
    image_reveal::install(page);
}

/// WASM entry point: wire logging, then install the controllers on the
/// live document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed.
    console_log::init_with_level(log::Level::Info).unwrap_or_default();

    let Some(page) = dom::BrowserPage::from_window() else {
        return;
    };
    install(&Rc::new(page));
    log::debug!("page controllers installed");
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
