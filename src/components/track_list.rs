use crate::components::{Icon, Playback};
use dioxus::prelude::*;

/// The queue for the selected folder. The row at `current_index` is the only
/// one marked active.
#[component]
pub fn TrackList() -> Element {
    let mut playback = use_context::<Signal<Playback>>();

    let (rows, folder) = {
        let controller = playback.read();
        let rows: Vec<(usize, String, String, bool)> = controller
            .queue()
            .iter()
            .enumerate()
            .map(|(idx, track)| {
                (
                    idx,
                    track.file.clone(),
                    track.name.clone(),
                    controller.is_active_row(idx),
                )
            })
            .collect();
        (rows, controller.folder().unwrap_or_default().to_string())
    };

    rsx! {
        div { class: "songList",
            if rows.is_empty() {
                p { class: "songList__empty", "Pick an album to fill the queue" }
            } else {
                ul {
                    for (idx , file , name , active) in rows {
                        li {
                            key: "{file}",
                            class: if active { "active" } else { "" },
                            onclick: move |_| {
                                playback.write().play_index(idx);
                            },
                            Icon { name: "music".to_string(), class: "icon-sm invert".to_string() }
                            div { class: "info",
                                div { class: "songname", "{name}" }
                                div { class: "songartist", "{folder}" }
                            }
                            div { class: "playnow",
                                span { "Play Now" }
                                Icon { name: "play".to_string(), class: "icon-sm invert".to_string() }
                            }
                        }
                    }
                }
            }
        }
    }
}
