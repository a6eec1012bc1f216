use thiserror::Error;

/// Failures while loading catalog metadata or folder listings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error("GET {url} returned status {status}")]
    Http { url: String, status: u16 },

    #[error("GET {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("could not decode response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("could not parse folder listing: {0}")]
    Listing(String),
}
