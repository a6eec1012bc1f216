use crate::components::{Icon, Playback};
use dioxus::prelude::*;

/// Play/Pause button - shows the affordance the controller asks for
#[component]
pub(super) fn PlayPauseButton() -> Element {
    let mut playback = use_context::<Signal<Playback>>();
    let icon = playback.read().indicator().icon();

    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            class: "transport-btn transport-btn--primary",
            aria_label: if icon == "pause" { "Pause" } else { "Play" },
            onclick: move |_| playback.write().toggle_play_pause(),
            Icon { name: icon.to_string(), class: "icon-md".to_string() }
        }
    }
}

#[component]
pub(super) fn PrevButton() -> Element {
    let mut playback = use_context::<Signal<Playback>>();

    rsx! {
        button {
            id: "prev-btn",
            r#type: "button",
            class: "transport-btn",
            aria_label: "Previous track",
            onclick: move |_| playback.write().previous(),
            Icon { name: "prev".to_string(), class: "icon-sm".to_string() }
        }
    }
}

#[component]
pub(super) fn NextButton() -> Element {
    let mut playback = use_context::<Signal<Playback>>();

    rsx! {
        button {
            id: "next-btn",
            r#type: "button",
            class: "transport-btn",
            aria_label: "Next track",
            onclick: move |_| playback.write().next(),
            Icon { name: "next".to_string(), class: "icon-sm".to_string() }
        }
    }
}
