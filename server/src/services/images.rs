//! Illustrative photos for a word from the Pexels search API.

use serde::Deserialize;

use super::LookupError;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    src: PhotoSources,
}

#[derive(Debug, Deserialize)]
struct PhotoSources {
    medium: String,
}

/// Search `url` for `query`, returning up to `per_page` medium-size photo URLs.
///
/// # Errors
///
/// Returns an error on transport failure, a non-success status, or a body
/// that is not a Pexels search response.
pub async fn fetch(
    client: &reqwest::Client,
    url: &str,
    api_key: &str,
    query: &str,
    per_page: u32,
) -> Result<Vec<String>, LookupError> {
    let resp = client
        .get(url)
        .header("Authorization", api_key)
        .query(&[("query", query.to_owned()), ("per_page", per_page.to_string())])
        .send()
        .await
        .map_err(|e| LookupError::Request(e.to_string()))?;

    if !resp.status().is_success() {
        return Err(LookupError::Status(resp.status().as_u16()));
    }

    let body = resp
        .json::<SearchResponse>()
        .await
        .map_err(|e| LookupError::Parse(e.to_string()))?;
    Ok(body.photos.into_iter().map(|p| p.src.medium).collect())
}

#[cfg(test)]
#[path = "images_test.rs"]
mod tests;
