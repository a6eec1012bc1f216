use crate::api::{FolderDescriptor, LibrarySource};
use futures_util::future::join_all;
use tracing::{info, warn};

/// Fetches every folder's metadata concurrently and returns the cards in
/// configured order. Folders whose metadata is missing or malformed are
/// logged and left out.
pub async fn load_catalog<S: LibrarySource>(source: &S, folders: &[String]) -> Vec<FolderDescriptor> {
    let results = join_all(folders.iter().map(|folder| source.folder_info(folder))).await;

    let mut cards = Vec::with_capacity(folders.len());
    for (folder, result) in folders.iter().zip(results) {
        match result {
            Ok(card) => cards.push(card),
            Err(err) => warn!(folder = %folder, error = %err, "failed to load card"),
        }
    }

    info!(loaded = cards.len(), configured = folders.len(), "catalog loaded");
    cards
}
