//! Word page: definitions, pronunciation, related words, images.

use maud::{Markup, html};

use super::layout;
use super::word_path;
use crate::services::dictionary::{Meaning, Phonetic, WordEntry};
use crate::services::session::Flash;

pub struct ResultView<'a> {
    /// The word as requested, which may differ in case from `entry.word`.
    pub word: &'a str,
    pub entry: &'a WordEntry,
    pub images: &'a [String],
    pub is_favorite: bool,
    pub flashes: &'a [Flash],
}

#[must_use]
pub fn render(view: &ResultView<'_>) -> Markup {
    let entry = view.entry;
    let headword = if entry.word.is_empty() { view.word } else { entry.word.as_str() };

    let content = html! {
        (layout::search_form(view.word))
        article.entry {
            header.entry-header {
                h1.headword { (headword) }
                @if let Some(phonetic) = &entry.phonetic {
                    span.phonetic { (phonetic) }
                }
                @if let Some(audio) = &entry.first_audio {
                    audio.pronunciation controls preload="none" src=(audio) {}
                }
                (favorite_form(view.word, view.is_favorite))
            }
            (pronunciations(&entry.phonetics))
            @for meaning in &entry.meanings {
                (meaning_section(meaning))
            }
            (related("Synonyms", "synonyms", &entry.aggregated.synonyms))
            (related("Antonyms", "antonyms", &entry.aggregated.antonyms))
            (usage_examples(&entry.aggregated.examples))
        }
        @if !view.images.is_empty() {
            section.images {
                @for (i, url) in view.images.iter().enumerate() {
                    img src=(url) alt={ (headword) " illustration " (i + 1) } loading="lazy";
                }
            }
        }
    };
    layout::page(headword, view.flashes, content)
}

fn favorite_form(word: &str, is_favorite: bool) -> Markup {
    html! {
        form.favorite method="post" action="/favorite" {
            input type="hidden" name="word" value=(word);
            button type="submit" aria-pressed=(if is_favorite { "true" } else { "false" }) {
                @if is_favorite { "★ Remove from favorites" } @else { "☆ Add to favorites" }
            }
        }
    }
}

/// Every spelled pronunciation, with a link to its recording when there is one.
fn pronunciations(phonetics: &[Phonetic]) -> Markup {
    html! {
        @if phonetics.iter().any(|p| p.text.is_some()) {
            ul.phonetics {
                @for phonetic in phonetics {
                    @if let Some(text) = &phonetic.text {
                        li {
                            span.phonetic-text { (text) }
                            @if let Some(audio) = &phonetic.audio {
                                " "
                                a.phonetic-audio href=(audio) { "listen" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn usage_examples(examples: &[String]) -> Markup {
    html! {
        @if !examples.is_empty() {
            section.examples {
                h3 { "Examples" }
                ul {
                    @for example in examples {
                        li { "“" (example) "”" }
                    }
                }
            }
        }
    }
}

fn meaning_section(meaning: &Meaning) -> Markup {
    html! {
        section.meaning {
            @if !meaning.part_of_speech.is_empty() {
                h2.part-of-speech { (meaning.part_of_speech) }
            }
            ol.definitions {
                @for definition in &meaning.definitions {
                    li {
                        p.definition { (definition.definition) }
                        @if let Some(example) = &definition.example {
                            p.example { "“" (example) "”" }
                        }
                    }
                }
            }
        }
    }
}

fn related(heading: &str, class: &str, words: &[String]) -> Markup {
    html! {
        @if !words.is_empty() {
            section class={ "related " (class) } {
                h3 { (heading) }
                ul.word-list {
                    @for word in words {
                        li { a href=(word_path(word)) { (word) } }
                    }
                }
            }
        }
    }
}
