//! Error types for the page behaviors.
//!
//! - [`DownloadError`] - Fetching or saving a release file
//! - [`DomError`] - Missing elements, globals, or failed DOM calls
//!
//! Neither ever reaches the user: download errors trigger the direct
//! navigation fallback and DOM errors disable the affected feature.

use thiserror::Error;

/// Failure while fetching or saving a release file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DownloadError {
    /// Browser window not available
    #[error("browser window not available")]
    NoWindow,
    /// Failed to build the request
    #[error("failed to create request")]
    RequestCreationFailed,
    /// Fetch rejected (CORS, offline, aborted)
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response
    #[error("HTTP error: {0}")]
    Http(u16),
    /// Failed to read the response body as a blob
    #[error("failed to read response body")]
    BodyReadFailed,
    /// `URL.createObjectURL` failed
    #[error("failed to create object URL")]
    ObjectUrlFailed,
    /// The synthetic download anchor could not be created or clicked
    #[error("failed to trigger save")]
    SaveFailed,
}

/// Failure while locating or mutating the document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("browser window not available")]
    NoWindow,
    #[error("document not available")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    /// Required element missing from the markup
    #[error("element #{0} not found")]
    MissingElement(&'static str),
    /// Required JavaScript global missing (e.g. `bootstrap`)
    #[error("global `{0}` not available")]
    MissingGlobal(&'static str),
    /// A DOM API call threw
    #[error("{0}")]
    Js(String),
}

impl DomError {
    /// Wrap a thrown JavaScript value.
    pub fn js(context: &str, value: &wasm_bindgen::JsValue) -> Self {
        Self::Js(format!("{context}: {}", crate::utils::dom::describe_js(value)))
    }
}
