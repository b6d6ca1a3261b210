//! Page shell shared by every page.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::services::session::Flash;

/// Loads the wasm bundle built into `static/pkg`; its start function
/// installs the page controllers.
const BOOT_SCRIPT: &str = "import init from '/static/pkg/client.js'; init();";

/// Wrap `content` in the document shell with header and flashes.
#[must_use]
pub fn page(title: &str, flashes: &[Flash], content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " · Lexicon" }
                link rel="stylesheet" href="/static/css/site.css";
            }
            body {
                header.site-header {
                    a.brand href="/" { "Lexicon" }
                    button #darkToggle type="button" aria-label="Toggle dark mode" { "◐" }
                }
                (flash_list(flashes))
                main { (content) }
                script type="module" { (PreEscaped(BOOT_SCRIPT)) }
            }
        }
    }
}

fn flash_list(flashes: &[Flash]) -> Markup {
    html! {
        @if !flashes.is_empty() {
            ul.flashes {
                @for flash in flashes {
                    li class={ "flash flash-" (flash.level.as_str()) } { (flash.message) }
                }
            }
        }
    }
}

/// Search form with the status and spinner the page glue drives.
#[must_use]
pub fn search_form(value: &str) -> Markup {
    html! {
        form #searchForm.search method="post" action="/search" {
            input #word type="search" name="word" value=(value) placeholder="Look up a word"
                autocomplete="off" required;
            button #searchBtn type="submit" { "Search" }
            span #spinner.spinner aria-hidden="true" {}
            p #status.status aria-live="polite" {}
        }
    }
}
