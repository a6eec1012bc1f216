//! Track loader: folder selection → listing fetch → queue.
//!
//! Folder selections can overlap: a slow listing for an earlier click may
//! finish after a later one. Each selection takes a [`LoadTicket`] from the
//! shared [`LoadGeneration`]; only the ticket of the latest selection may
//! commit, so the queue always reflects the folder the user picked last.

use crate::api::{LibrarySource, Track};
use crate::error::LoadError;
use crate::playback::{MediaElement, PlaybackController};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadGeneration {
    current: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    folder: String,
}

impl LoadTicket {
    pub fn folder(&self) -> &str {
        &self.folder
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl LoadGeneration {
    /// Starts a new selection, invalidating every ticket issued before it.
    pub fn begin(&mut self, folder: impl Into<String>) -> LoadTicket {
        self.current = self.current.wrapping_add(1);
        LoadTicket {
            generation: self.current,
            folder: folder.into(),
        }
    }

    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.generation == self.current
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Queue replaced; the first track (if any) is playing.
    Committed { tracks: usize },
    /// A newer selection superseded this one; result dropped.
    Stale,
    /// Fetch or parse failed; previous queue kept.
    Failed(LoadError),
}

pub async fn load_tracks<S: LibrarySource>(
    source: &S,
    folder: &str,
) -> Result<Vec<Track>, LoadError> {
    let tracks = source.folder_tracks(folder).await?;
    debug!(folder = %folder, count = tracks.len(), "listing parsed");
    Ok(tracks)
}

/// Applies a finished load to the controller if `ticket` is still the
/// latest selection.
pub fn commit<M: MediaElement>(
    generation: &LoadGeneration,
    ticket: &LoadTicket,
    result: Result<Vec<Track>, LoadError>,
    controller: &mut PlaybackController<M>,
) -> LoadOutcome {
    if !generation.is_current(ticket) {
        debug!(
            folder = %ticket.folder,
            generation = ticket.generation,
            "discarding stale listing"
        );
        return LoadOutcome::Stale;
    }

    match result {
        Ok(tracks) => {
            let count = tracks.len();
            controller.replace_queue(ticket.folder.clone(), tracks);
            if count > 0 {
                controller.play_index(0);
            }
            info!(folder = %ticket.folder, tracks = count, "queue loaded");
            LoadOutcome::Committed { tracks: count }
        }
        Err(err) => {
            warn!(folder = %ticket.folder, error = %err, "error loading songs");
            LoadOutcome::Failed(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FolderDescriptor;
    use crate::playback::fake::FakeMedia;

    struct StaticSource;

    impl LibrarySource for StaticSource {
        async fn folder_info(&self, folder: &str) -> Result<FolderDescriptor, LoadError> {
            Err(LoadError::Http {
                url: folder.to_string(),
                status: 404,
            })
        }

        async fn folder_tracks(&self, folder: &str) -> Result<Vec<Track>, LoadError> {
            match folder {
                "broken" => Err(LoadError::Listing("truncated".to_string())),
                "empty" => Ok(Vec::new()),
                other => Ok(vec![
                    Track::new(format!("/songs/{other}/a.mp3"), "a"),
                    Track::new(format!("/songs/{other}/b.mp3"), "b"),
                ]),
            }
        }
    }

    fn tracks_for(folder: &str) -> Vec<Track> {
        vec![Track::new(format!("/songs/{folder}/1.mp3"), format!("{folder} 1"))]
    }

    #[test]
    fn generation_invalidates_older_tickets() {
        let mut generation = LoadGeneration::default();
        let first = generation.begin("copy");
        assert!(generation.is_current(&first));
        let second = generation.begin("anirudh");
        assert!(!generation.is_current(&first));
        assert!(generation.is_current(&second));
        assert!(second.generation() > first.generation());
        assert_eq!(second.folder(), "anirudh");
    }

    #[test]
    fn successful_load_replaces_queue_and_autoplays_first() {
        let mut generation = LoadGeneration::default();
        let mut controller = PlaybackController::new(FakeMedia::new());
        let ticket = generation.begin("copy");

        let outcome = commit(&generation, &ticket, Ok(tracks_for("copy")), &mut controller);

        assert_eq!(outcome, LoadOutcome::Committed { tracks: 1 });
        assert_eq!(controller.folder(), Some("copy"));
        assert_eq!(controller.current_index(), Some(0));
        assert_eq!(controller.now_playing(), Some("copy 1"));
        assert!(controller.is_playing());
    }

    #[test]
    fn empty_listing_commits_without_playing() {
        let mut generation = LoadGeneration::default();
        let mut controller = PlaybackController::new(FakeMedia::new());
        let ticket = generation.begin("empty");

        let outcome = commit(&generation, &ticket, Ok(Vec::new()), &mut controller);

        assert_eq!(outcome, LoadOutcome::Committed { tracks: 0 });
        assert!(controller.queue().is_empty());
        assert_eq!(controller.current_index(), None);
        assert!(!controller.is_playing());
    }

    #[test]
    fn stale_result_is_discarded_when_it_finishes_last() {
        let mut generation = LoadGeneration::default();
        let mut controller = PlaybackController::new(FakeMedia::new());

        let slow = generation.begin("copy");
        let fast = generation.begin("anirudh");

        commit(&generation, &fast, Ok(tracks_for("anirudh")), &mut controller);
        let outcome = commit(&generation, &slow, Ok(tracks_for("copy")), &mut controller);

        assert_eq!(outcome, LoadOutcome::Stale);
        assert_eq!(controller.folder(), Some("anirudh"));
        assert_eq!(controller.now_playing(), Some("anirudh 1"));
    }

    #[test]
    fn stale_result_is_discarded_when_it_finishes_first() {
        let mut generation = LoadGeneration::default();
        let mut controller = PlaybackController::new(FakeMedia::new());

        let slow = generation.begin("copy");
        let latest = generation.begin("anirudh");

        let outcome = commit(&generation, &slow, Ok(tracks_for("copy")), &mut controller);
        assert_eq!(outcome, LoadOutcome::Stale);
        assert!(controller.queue().is_empty());

        commit(&generation, &latest, Ok(tracks_for("anirudh")), &mut controller);
        assert_eq!(controller.folder(), Some("anirudh"));
    }

    #[test]
    fn failed_load_keeps_previous_queue() {
        let mut generation = LoadGeneration::default();
        let mut controller = PlaybackController::new(FakeMedia::new());

        let first = generation.begin("copy");
        commit(&generation, &first, Ok(tracks_for("copy")), &mut controller);

        let second = generation.begin("broken");
        let outcome = commit(
            &generation,
            &second,
            Err(LoadError::Listing("truncated".to_string())),
            &mut controller,
        );

        assert!(matches!(outcome, LoadOutcome::Failed(LoadError::Listing(_))));
        assert_eq!(controller.folder(), Some("copy"));
        assert_eq!(controller.queue().len(), 1);
        assert_eq!(controller.current_index(), Some(0));
    }

    #[tokio::test]
    async fn load_tracks_passes_listing_through() {
        let tracks = load_tracks(&StaticSource, "copy").await.unwrap();
        let names: Vec<&str> = tracks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn load_tracks_surfaces_listing_errors() {
        let err = load_tracks(&StaticSource, "broken").await.unwrap_err();
        assert_eq!(err, LoadError::Listing("truncated".to_string()));
    }
}
