//! Playback controller: queue, current index and transport over a single
//! media element.
//!
//! The controller never touches the DOM. Everything it needs from the host
//! media engine goes through [`MediaElement`], and the host reports progress
//! back through the `on_*` callbacks, so the whole state machine runs the same
//! against a real `<audio>` element or an in-memory fake.

use crate::api::models::{time_label, Track};
use tracing::debug;

/// The subset of an HTML media element the controller drives.
pub trait MediaElement {
    fn set_source(&mut self, url: &str);
    fn play(&mut self);
    fn pause(&mut self);
    fn is_paused(&self) -> bool;
    fn has_source(&self) -> bool;
    fn current_time(&self) -> f64;
    /// Track length in seconds; `NaN` until metadata has loaded.
    fn duration(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);
}

/// Which affordance the play/pause button shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayIndicator {
    #[default]
    Play,
    Pause,
}

impl PlayIndicator {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
        }
    }
}

pub struct PlaybackController<M: MediaElement> {
    media: M,
    queue: Vec<Track>,
    folder: Option<String>,
    current_index: Option<usize>,
    is_playing: bool,
    indicator: PlayIndicator,
    now_playing: Option<String>,
    time_label: String,
    progress_percent: f64,
}

impl<M: MediaElement> PlaybackController<M> {
    pub fn new(media: M) -> Self {
        Self {
            media,
            queue: Vec::new(),
            folder: None,
            current_index: None,
            is_playing: false,
            indicator: PlayIndicator::Play,
            now_playing: None,
            time_label: time_label(0.0, 0.0),
            progress_percent: 0.0,
        }
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    pub fn queue(&self) -> &[Track] {
        &self.queue
    }

    /// Folder key the current queue was loaded from.
    pub fn folder(&self) -> Option<&str> {
        self.folder.as_deref()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current_index.and_then(|idx| self.queue.get(idx))
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn indicator(&self) -> PlayIndicator {
        self.indicator
    }

    pub fn now_playing(&self) -> Option<&str> {
        self.now_playing.as_deref()
    }

    pub fn time_label(&self) -> &str {
        &self.time_label
    }

    pub fn progress_percent(&self) -> f64 {
        self.progress_percent
    }

    pub fn is_active_row(&self, index: usize) -> bool {
        self.current_index == Some(index)
    }

    /// Discards the old queue and index. Playback of the previous source is
    /// left alone until something new is played.
    pub fn replace_queue(&mut self, folder: impl Into<String>, tracks: Vec<Track>) {
        self.folder = Some(folder.into());
        self.queue = tracks;
        self.current_index = None;
    }

    /// Plays the queue entry at `index`. Returns false when out of range.
    pub fn play_index(&mut self, index: usize) -> bool {
        let Some(track) = self.queue.get(index).cloned() else {
            return false;
        };
        self.current_index = Some(index);
        self.start(&track);
        true
    }

    /// Plays `track`, keeping `current_index` pointed at it. A track that is
    /// not in the queue replaces the queue.
    pub fn play(&mut self, track: Track) {
        match self.queue.iter().position(|t| t.file == track.file) {
            Some(pos) => self.current_index = Some(pos),
            None => {
                self.queue = vec![track.clone()];
                self.current_index = Some(0);
            }
        }
        self.start(&track);
    }

    fn start(&mut self, track: &Track) {
        debug!(file = %track.file, index = ?self.current_index, "starting track");
        self.media.set_source(&track.file);
        self.media.play();
        self.is_playing = true;
        self.indicator = PlayIndicator::Pause;
        self.now_playing = Some(track.name.clone());
        self.time_label = time_label(0.0, 0.0);
        self.progress_percent = 0.0;
    }

    pub fn toggle_play_pause(&mut self) {
        if !self.media.has_source() {
            return;
        }
        if self.media.is_paused() {
            self.media.play();
            self.is_playing = true;
            self.indicator = PlayIndicator::Pause;
        } else {
            self.media.pause();
            self.is_playing = false;
            self.indicator = PlayIndicator::Play;
        }
    }

    pub fn next(&mut self) {
        let len = self.queue.len();
        if len == 0 {
            return;
        }
        let target = match self.current_index {
            Some(idx) => (idx + 1) % len,
            None => 0,
        };
        self.play_index(target);
    }

    pub fn previous(&mut self) {
        let len = self.queue.len();
        if len == 0 {
            return;
        }
        let target = match self.current_index {
            Some(idx) => (idx + len - 1) % len,
            None => len - 1,
        };
        self.play_index(target);
    }

    /// Seeks to `fraction` of the track. Clamped to `[0, 1]`; ignored while
    /// the duration is unknown.
    pub fn seek(&mut self, fraction: f64) {
        let duration = self.media.duration();
        if !duration.is_finite() || duration <= 0.0 || fraction.is_nan() {
            return;
        }
        let position = fraction.clamp(0.0, 1.0) * duration;
        self.media.set_current_time(position);
    }

    pub fn on_loaded_metadata(&mut self) {
        let duration = self.media.duration();
        if duration.is_finite() {
            self.time_label = time_label(0.0, duration);
        }
    }

    pub fn on_time_update(&mut self) {
        let duration = self.media.duration();
        if !duration.is_finite() || duration <= 0.0 {
            return;
        }
        let current = self.media.current_time();
        self.progress_percent = (current / duration) * 100.0;
        self.time_label = time_label(current, duration);
    }

    pub fn on_track_ended(&mut self) {
        self.next();
    }
}

/// Converts a click offset inside the seek bar into a track fraction.
pub fn seek_fraction(offset_x: f64, width: f64) -> Option<f64> {
    if !width.is_finite() || width <= 0.0 {
        return None;
    }
    Some(offset_x / width)
}

#[cfg(test)]
pub(crate) mod fake {
    use super::MediaElement;

    /// In-memory media element. `play`/`pause` flip `paused`; sources and
    /// seeks are recorded.
    #[derive(Debug, Default)]
    pub struct FakeMedia {
        pub source: Option<String>,
        pub paused: bool,
        pub time: f64,
        pub duration: f64,
        pub play_calls: usize,
    }

    impl FakeMedia {
        pub fn new() -> Self {
            Self {
                paused: true,
                duration: f64::NAN,
                ..Self::default()
            }
        }
    }

    impl MediaElement for FakeMedia {
        fn set_source(&mut self, url: &str) {
            self.source = Some(url.to_string());
            self.time = 0.0;
            self.duration = f64::NAN;
        }

        fn play(&mut self) {
            if self.source.is_some() {
                self.paused = false;
            }
            self.play_calls += 1;
        }

        fn pause(&mut self) {
            self.paused = true;
        }

        fn is_paused(&self) -> bool {
            self.paused
        }

        fn has_source(&self) -> bool {
            self.source.is_some()
        }

        fn current_time(&self) -> f64 {
            self.time
        }

        fn duration(&self) -> f64 {
            self.duration
        }

        fn set_current_time(&mut self, seconds: f64) {
            self.time = seconds;
        }
    }
}
