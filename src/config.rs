//! Compiled-in player configuration.
//!
//! There is no runtime configuration surface: the catalog, the breakpoint and
//! the server layout are fixed at build time and handed to the UI through
//! Dioxus context as a single [`PlayerConfig`] value.

const CATALOG: &[&str] = &[
    "nocopy",
    "copy",
    "ar reheman",
    "yo yo honey",
    "anirudh",
    "arjit singh",
    "atif salam",
    "pritam chillar",
];

const DEFAULT_FOLDER: &str = "nocopy";
const AUDIO_EXTENSION: &str = ".mp3";
const SONGS_ROOT: &str = "songs";
const SIDEBAR_BREAKPOINT: f64 = 1400.0;

#[cfg(not(target_arch = "wasm32"))]
const DESKTOP_BASE_URL: &str = "http://127.0.0.1:5500/";

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerConfig {
    /// Ordered folder keys shown as cards.
    pub catalog: Vec<String>,
    /// Folder whose queue is loaded at startup.
    pub default_folder: Option<String>,
    pub audio_extension: String,
    pub songs_root: String,
    /// Viewport width (CSS px) at or below which the sidebar collapses.
    pub sidebar_breakpoint: f64,
    /// Absolute origin for fetches. `None` means relative to the page.
    pub base_url: Option<String>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            catalog: CATALOG.iter().map(|key| key.to_string()).collect(),
            default_folder: Some(DEFAULT_FOLDER.to_string()),
            audio_extension: AUDIO_EXTENSION.to_string(),
            songs_root: SONGS_ROOT.to_string(),
            sidebar_breakpoint: SIDEBAR_BREAKPOINT,
            base_url: default_base_url(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn default_base_url() -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn default_base_url() -> Option<String> {
    Some(DESKTOP_BASE_URL.to_string())
}

impl PlayerConfig {
    /// Directory listing location for a folder, e.g. `/songs/ar%20reheman/`.
    pub fn listing_path(&self, folder: &str) -> String {
        format!("/{}/{}/", self.songs_root, urlencoding::encode(folder))
    }

    /// Metadata document location for a folder, relative to the page.
    pub fn info_path(&self, folder: &str) -> String {
        format!("{}/{}/info.json", self.songs_root, urlencoding::encode(folder))
    }

    /// Joins a path onto `base_url`, or returns it untouched when fetching
    /// relative to the page.
    pub fn resolve(&self, path: &str) -> String {
        match &self.base_url {
            Some(base) => format!(
                "{}/{}",
                base.trim_end_matches('/'),
                path.trim_start_matches('/')
            ),
            None => path.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_keeps_configured_order() {
        let config = PlayerConfig::default();
        assert_eq!(config.catalog.first().map(String::as_str), Some("nocopy"));
        assert_eq!(config.catalog.len(), 8);
        assert_eq!(config.catalog[2], "ar reheman");
    }

    #[test]
    fn paths_encode_folder_segments() {
        let config = PlayerConfig::default();
        assert_eq!(config.listing_path("ar reheman"), "/songs/ar%20reheman/");
        assert_eq!(config.info_path("copy"), "songs/copy/info.json");
    }

    #[test]
    fn resolve_joins_base_url_without_double_slashes() {
        let config = PlayerConfig {
            base_url: Some("http://localhost:5500/".to_string()),
            ..PlayerConfig::default()
        };
        assert_eq!(
            config.resolve("/songs/copy/"),
            "http://localhost:5500/songs/copy/"
        );
        assert_eq!(
            config.resolve("songs/copy/info.json"),
            "http://localhost:5500/songs/copy/info.json"
        );

        let relative = PlayerConfig {
            base_url: None,
            ..PlayerConfig::default()
        };
        assert_eq!(relative.resolve("songs/copy/info.json"), "songs/copy/info.json");
    }
}
