//! Landing page: search, word of the day, history, favorites.

use maud::{Markup, html};

use super::layout;
use super::word_path;
use crate::services::session::Flash;

pub struct IndexView<'a> {
    pub word_of_day: &'a str,
    pub history: &'a [String],
    pub favorites: &'a [String],
    pub flashes: &'a [Flash],
}

#[must_use]
pub fn render(view: &IndexView<'_>) -> Markup {
    let content = html! {
        section.hero {
            h1 { "Look up a word" }
            (layout::search_form(""))
        }
        section.word-of-the-day {
            h2 { "Word of the day" }
            a.wotd href=(word_path(view.word_of_day)) { (view.word_of_day) }
        }
        (word_list("Recent searches", "history", view.history))
        (word_list("Favorites", "favorites", view.favorites))
    };
    layout::page("Search", view.flashes, content)
}

fn word_list(heading: &str, class: &str, words: &[String]) -> Markup {
    html! {
        @if !words.is_empty() {
            section class=(class) {
                h2 { (heading) }
                ul.word-list {
                    @for word in words {
                        li { a href=(word_path(word)) { (word) } }
                    }
                }
            }
        }
    }
}
