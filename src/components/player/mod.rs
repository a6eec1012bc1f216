use crate::components::Playback;
use crate::playback::seek_fraction;
use dioxus::prelude::*;
use std::rc::Rc;

mod controls;

use controls::{NextButton, PlayPauseButton, PrevButton};

/// Fixed bottom bar: seek bar, now-playing label, transport and time.
#[component]
pub fn Player() -> Element {
    let mut playback = use_context::<Signal<Playback>>();
    let mut seekbar = use_signal(|| None::<Rc<MountedData>>);

    let (now_playing, time_label, progress) = {
        let controller = playback.read();
        (
            controller.now_playing().unwrap_or_default().to_string(),
            controller.time_label().to_string(),
            controller.progress_percent(),
        )
    };

    let on_seek_click = move |evt: MouseEvent| {
        let offset = evt.element_coordinates().x;
        let Some(bar) = seekbar() else {
            return;
        };
        spawn(async move {
            let Ok(rect) = bar.get_client_rect().await else {
                return;
            };
            if let Some(fraction) = seek_fraction(offset, rect.width()) {
                playback.write().seek(fraction);
            }
        });
    };

    rsx! {
        div { class: "playbar",
            div {
                class: "seekbar",
                onmounted: move |evt| seekbar.set(Some(evt.data())),
                onclick: on_seek_click,
                div { class: "circle", style: "left: {progress}%;" }
            }
            div { class: "abovebar",
                div { class: "songinfo", "{now_playing}" }
                div { class: "songbuttons",
                    PrevButton {}
                    PlayPauseButton {}
                    NextButton {}
                }
                div { class: "songtime", "{time_label}" }
            }
        }
    }
}
