//! Dictionary lookups against the public Free Dictionary API.
//!
//! DESIGN
//! ======
//! The API's JSON is only loosely consistent (missing arrays, non-list
//! synonym fields), so entries are read by walking `serde_json::Value`
//! rather than through a strict derive. Unknown or malformed pieces are
//! skipped instead of failing the whole entry.

use serde_json::Value;

use super::LookupError;

/// Title the API returns when a word has no entry.
const NOT_FOUND_TITLE: &str = "No Definitions Found";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Phonetic {
    pub text: Option<String>,
    pub audio: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Definition {
    pub definition: String,
    pub example: Option<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Meaning {
    pub part_of_speech: String,
    pub definitions: Vec<Definition>,
}

/// Synonyms, antonyms, and examples gathered across every definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregated {
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    pub examples: Vec<String>,
}

/// One dictionary entry, normalized for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    pub phonetic: Option<String>,
    pub phonetics: Vec<Phonetic>,
    pub meanings: Vec<Meaning>,
    pub aggregated: Aggregated,
    /// First non-empty pronunciation audio URL.
    pub first_audio: Option<String>,
}

/// Fetch `word` from the dictionary API rooted at `base_url`.
///
/// `Ok(None)` covers every "no entry" outcome the API reports: non-success
/// status, the not-found object, or an empty result list.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not JSON.
pub async fn fetch(client: &reqwest::Client, base_url: &str, word: &str) -> Result<Option<WordEntry>, LookupError> {
    let url = format!("{base_url}{}", urlencoding::encode(word));
    let resp = client
        .get(&url)
        .send()
        .await
        .map_err(|e| LookupError::Request(e.to_string()))?;

    if !resp.status().is_success() {
        tracing::debug!(status = %resp.status(), %word, "dictionary returned no entry");
        return Ok(None);
    }

    let body: Value = resp
        .json()
        .await
        .map_err(|e| LookupError::Parse(e.to_string()))?;
    Ok(entry_from_response(&body))
}

/// Pick the first entry out of a dictionary API response body.
#[must_use]
pub fn entry_from_response(body: &Value) -> Option<WordEntry> {
    match body {
        Value::Array(entries) => entries.first().and_then(parse_entry),
        Value::Object(obj) => {
            if obj.get("title").and_then(Value::as_str) != Some(NOT_FOUND_TITLE) {
                tracing::debug!("unexpected dictionary object response");
            }
            None
        }
        _ => None,
    }
}

/// Normalize one raw API entry and aggregate its metadata.
#[must_use]
pub fn parse_entry(raw: &Value) -> Option<WordEntry> {
    let root = raw.as_object()?;

    let phonetics = root
        .get("phonetics")
        .and_then(Value::as_array)
        .map_or_else(Vec::new, |items| items.iter().filter_map(parse_phonetic).collect());

    let meanings = root
        .get("meanings")
        .and_then(Value::as_array)
        .map_or_else(Vec::new, |items| items.iter().filter_map(parse_meaning).collect());

    let first_audio = phonetics.iter().find_map(|p| p.audio.clone());
    let aggregated = aggregate(&meanings);

    Some(WordEntry {
        word: string_field(raw, "word").unwrap_or_default(),
        phonetic: string_field(raw, "phonetic"),
        phonetics,
        meanings,
        aggregated,
        first_audio,
    })
}

fn aggregate(meanings: &[Meaning]) -> Aggregated {
    let mut out = Aggregated::default();
    for definition in meanings.iter().flat_map(|m| &m.definitions) {
        push_unique(&mut out.synonyms, &definition.synonyms);
        push_unique(&mut out.antonyms, &definition.antonyms);
        if let Some(example) = &definition.example {
            out.examples.push(example.clone());
        }
    }
    out
}

fn push_unique(into: &mut Vec<String>, items: &[String]) {
    for item in items {
        if !into.contains(item) {
            into.push(item.clone());
        }
    }
}

fn parse_phonetic(value: &Value) -> Option<Phonetic> {
    value.as_object()?;
    Some(Phonetic { text: string_field(value, "text"), audio: string_field(value, "audio") })
}

fn parse_meaning(value: &Value) -> Option<Meaning> {
    value.as_object()?;
    let definitions = value
        .get("definitions")
        .and_then(Value::as_array)
        .map_or_else(Vec::new, |items| items.iter().filter_map(parse_definition).collect());
    Some(Meaning { part_of_speech: string_field(value, "partOfSpeech").unwrap_or_default(), definitions })
}

fn parse_definition(value: &Value) -> Option<Definition> {
    value.as_object()?;
    Some(Definition {
        definition: string_field(value, "definition").unwrap_or_default(),
        example: string_field(value, "example"),
        synonyms: string_list(value, "synonyms"),
        antonyms: string_list(value, "antonyms"),
    })
}

/// Non-empty string field, or `None`.
fn string_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Non-empty strings of a list field; a missing or non-list field is empty.
fn string_list(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map_or_else(Vec::new, |items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect()
        })
}

#[cfg(test)]
#[path = "dictionary_test.rs"]
mod tests;
