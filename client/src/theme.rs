//! Light/dark theme initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and applies the `dark`
//! class to the `<html>` element. Toggle derives the next theme from the
//! class actually applied, writes it back to `localStorage`, and updates
//! the class.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: with storage unavailable (private mode,
//! disabled cookies) the class still flips and the toggle keeps working for
//! the lifetime of the page.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::rc::Rc;

/// `localStorage` key holding the preference.
pub const STORAGE_KEY: &str = "theme";

/// Class on the document root that stylesheets key dark mode off.
pub const DARK_CLASS: &str = "dark";

/// Page surface the theme controller drives.
pub trait ThemeHost {
    /// Whether the document root currently carries `class`.
    fn root_has_class(&self, class: &str) -> bool;
    /// Add (`present == true`) or remove `class` on the document root.
    fn set_root_class(&self, class: &str, present: bool);
    /// Read a stored preference. `None` when unset or storage is unavailable.
    fn load_preference(&self, key: &str) -> Option<String>;
    /// Store a preference. Returns `false` when it could not be persisted.
    fn store_preference(&self, key: &str, value: &str) -> bool;
    /// Run `handler` on every activation of the theme toggle control.
    fn on_theme_toggle(&self, handler: Box<dyn Fn()>);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a stored preference. Anything but `"dark"` is light.
    #[must_use]
    pub fn from_preference(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Theme currently applied to the document root.
pub fn current<H: ThemeHost + ?Sized>(host: &H) -> Theme {
    if host.root_has_class(DARK_CLASS) { Theme::Dark } else { Theme::Light }
}

/// Apply or remove the `dark` class on the document root.
pub fn apply<H: ThemeHost + ?Sized>(host: &H, theme: Theme) {
    host.set_root_class(DARK_CLASS, theme == Theme::Dark);
}

/// Apply the stored preference and return it.
pub fn init<H: ThemeHost + ?Sized>(host: &H) -> Theme {
    let theme = Theme::from_preference(host.load_preference(STORAGE_KEY).as_deref());
    apply(host, theme);
    theme
}

/// Flip the applied theme and persist the new preference.
pub fn toggle<H: ThemeHost + ?Sized>(host: &H) -> Theme {
    let next = current(host).toggled();
    apply(host, next);
    if !host.store_preference(STORAGE_KEY, next.as_str()) {
        log::debug!("theme preference not persisted; storage unavailable");
    }
    next
}

/// Apply the stored preference and attach the toggle listener.
pub fn install<H: ThemeHost + 'static>(page: &Rc<H>) {
    let initial = init(page.as_ref());
    log::debug!("theme initialized: {}", initial.as_str());

    let on_toggle = Rc::clone(page);
    page.on_theme_toggle(Box::new(move || {
        toggle(on_toggle.as_ref());
    }));
}
