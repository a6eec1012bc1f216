use dioxus::prelude::*;

use crate::api::HttpLibrary;
use crate::components::Playback;
use crate::config::PlayerConfig;
use crate::tracks::{commit, load_tracks, LoadGeneration};

/// Handle shared through context that turns a folder click into a queue.
#[derive(Clone)]
pub struct FolderLoader {
    config: PlayerConfig,
    playback: Signal<Playback>,
    generation: Signal<LoadGeneration>,
}

impl FolderLoader {
    pub fn new(
        config: PlayerConfig,
        playback: Signal<Playback>,
        generation: Signal<LoadGeneration>,
    ) -> Self {
        Self {
            config,
            playback,
            generation,
        }
    }

    pub fn select(&self, folder: String) {
        let mut generation = self.generation;
        let mut playback = self.playback;
        let library = HttpLibrary::new(self.config.clone());
        let ticket = generation.write().begin(folder);

        spawn(async move {
            let result = load_tracks(&library, ticket.folder()).await;
            let current = *generation.peek();
            let mut controller = playback.write();
            commit(&current, &ticket, result, &mut *controller);
        });
    }
}
