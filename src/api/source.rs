use crate::api::listing::parse_listing;
use crate::api::models::{FolderDescriptor, FolderInfo, Track};
use crate::config::PlayerConfig;
use crate::error::LoadError;
#[cfg(not(target_arch = "wasm32"))]
use once_cell::sync::Lazy;

#[cfg(not(target_arch = "wasm32"))]
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Where folder metadata and listings come from.
#[allow(async_fn_in_trait)]
pub trait LibrarySource {
    async fn folder_info(&self, folder: &str) -> Result<FolderDescriptor, LoadError>;

    async fn folder_tracks(&self, folder: &str) -> Result<Vec<Track>, LoadError>;
}

/// Fetches `songs/{folder}/info.json` and `/songs/{folder}/` from the server
/// hosting the page (or the configured origin on desktop).
#[derive(Debug, Clone)]
pub struct HttpLibrary {
    config: PlayerConfig,
}

impl HttpLibrary {
    pub fn new(config: PlayerConfig) -> Self {
        Self { config }
    }
}

impl LibrarySource for HttpLibrary {
    async fn folder_info(&self, folder: &str) -> Result<FolderDescriptor, LoadError> {
        let url = self.config.resolve(&self.config.info_path(folder));
        let body = get_text(&url).await?;
        let info: FolderInfo = serde_json::from_str(&body).map_err(|e| LoadError::Decode {
            url: url.clone(),
            message: e.to_string(),
        })?;
        let mut card = FolderDescriptor::from_info(folder, info);
        if !card.image_url.contains("://") && !card.image_url.starts_with("data:") {
            card.image_url = self.config.resolve(&card.image_url);
        }
        Ok(card)
    }

    async fn folder_tracks(&self, folder: &str) -> Result<Vec<Track>, LoadError> {
        let url = self.config.resolve(&self.config.listing_path(folder));
        let html = get_text(&url).await?;
        parse_listing(&html, &url, &self.config.audio_extension)
    }
}

#[cfg(target_arch = "wasm32")]
async fn get_text(url: &str) -> Result<String, LoadError> {
    let response = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| LoadError::Network {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    if !response.ok() {
        return Err(LoadError::Http {
            url: url.to_string(),
            status: response.status(),
        });
    }

    response.text().await.map_err(|e| LoadError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}

#[cfg(not(target_arch = "wasm32"))]
async fn get_text(url: &str) -> Result<String, LoadError> {
    let response = HTTP_CLIENT
        .get(url)
        .send()
        .await
        .map_err(|e| LoadError::Network {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Http {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| LoadError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}
