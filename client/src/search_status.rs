//! Search status feedback around the search form.
//!
//! Submitting the form shows the in-progress message, reveals the spinner,
//! and disables the submit button so the browser's native submission is
//! not sent twice. Typing into the search field again restores the idle
//! state. No request is made here; the form posts on its own.

#[cfg(test)]
#[path = "search_status_test.rs"]
mod search_status_test;

use std::rc::Rc;

/// Status text shown while a search is in flight.
pub const SEARCHING_MESSAGE: &str = "Searching…";

/// Page surface the search status controller drives.
///
/// Every method is a no-op when the page lacks the target element.
pub trait SearchHost {
    /// Replace the text of the status container.
    fn set_status_text(&self, text: &str);
    /// Set the spinner's `aria-hidden` attribute.
    fn set_spinner_hidden(&self, hidden: bool);
    /// Set the submit button's `disabled` flag.
    fn set_submit_disabled(&self, disabled: bool);
    /// Run `handler` on every submission of the search form.
    fn on_search_submit(&self, handler: Box<dyn Fn()>);
    /// Run `handler` on every input event of the search field.
    fn on_search_input(&self, handler: Box<dyn Fn()>);
}

/// The two states the search UI moves between.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchPhase {
    #[default]
    Idle,
    Searching,
}

impl SearchPhase {
    #[must_use]
    pub fn status_text(self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Searching => SEARCHING_MESSAGE,
        }
    }

    #[must_use]
    pub fn spinner_hidden(self) -> bool {
        self == Self::Idle
    }

    #[must_use]
    pub fn submit_disabled(self) -> bool {
        self == Self::Searching
    }
}

/// Reflect `phase` onto the status text, spinner, and submit button.
pub fn render<H: SearchHost + ?Sized>(host: &H, phase: SearchPhase) {
    host.set_status_text(phase.status_text());
    host.set_spinner_hidden(phase.spinner_hidden());
    host.set_submit_disabled(phase.submit_disabled());
}

/// Attach the submit and input listeners.
pub fn install<H: SearchHost + 'static>(page: &Rc<H>) {
    let on_submit = Rc::clone(page);
    page.on_search_submit(Box::new(move || {
        log::debug!("search submitted");
        render(on_submit.as_ref(), SearchPhase::Searching);
    }));

    let on_input = Rc::clone(page);
    page.on_search_input(Box::new(move || render(on_input.as_ref(), SearchPhase::Idle)));
}
