//! Data Loader
//!
//! Fetches the static extension list. `load` never fails: any error is
//! logged and the caller gets an empty list.

use gloo_net::http::Request;

use crate::models::Extension;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("fetch failed: {0}")]
    Network(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("unreadable response body: {0}")]
    Body(String),
    #[error("malformed extension data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Decode a JSON array of extension records, keeping source order
pub fn parse_extensions(text: &str) -> Result<Vec<Extension>, LoadError> {
    Ok(serde_json::from_str(text)?)
}

pub async fn fetch_extensions(url: &str) -> Result<Vec<Extension>, LoadError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| LoadError::Body(e.to_string()))?;
    parse_extensions(&text)
}

/// Fetch extensions, degrading to an empty list on failure
pub async fn load(url: &str) -> Vec<Extension> {
    or_empty(url, fetch_extensions(url).await)
}

/// Unwrap a fetch result, logging and dropping any error
pub fn or_empty(url: &str, result: Result<Vec<Extension>, LoadError>) -> Vec<Extension> {
    match result {
        Ok(items) => {
            log::info!("[LOAD] Loaded {} extensions from {}", items.len(), url);
            items
        }
        Err(e) => {
            log::error!("[LOAD] Failed to load {}: {}", url, e);
            Vec::new()
        }
    }
}
