//! Audio Manager - binds the playback controller to the host media engine.
//! The browser build wraps the page's `<audio>` element directly; the desktop
//! build drives an element inside the webview.

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use native::{AudioController, AudioElement};
#[cfg(target_arch = "wasm32")]
pub use web::{AudioController, AudioElement};

/// The controller the UI holds in context.
pub type Playback = crate::playback::PlaybackController<AudioElement>;
