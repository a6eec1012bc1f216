// Browser (wasm) media backend: a single <audio> element owned by the page.
use super::Playback;
use crate::playback::MediaElement;
use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::prelude::*;
use tracing::warn;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, HtmlAudioElement};

const AUDIO_ELEMENT_ID: &str = "albumdeck-audio";

/// Initialize the global audio element once.
pub fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(AUDIO_ELEMENT_ID);
    audio.set_attribute("preload", "metadata").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

fn web_try_play(audio: &HtmlAudioElement) {
    match audio.play() {
        Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                warn!(?err, "browser rejected play()");
            }
        }),
        Err(err) => warn!(?err, "play() threw"),
    }
}

pub struct AudioElement {
    audio: Option<HtmlAudioElement>,
}

impl AudioElement {
    pub fn attach() -> Self {
        let audio = get_or_create_audio_element();
        if audio.is_none() {
            warn!("no document available; playback disabled");
        }
        Self { audio }
    }
}

impl MediaElement for AudioElement {
    fn set_source(&mut self, url: &str) {
        if let Some(audio) = &self.audio {
            audio.set_src(url);
        }
    }

    fn play(&mut self) {
        if let Some(audio) = &self.audio {
            web_try_play(audio);
        }
    }

    fn pause(&mut self) {
        if let Some(audio) = &self.audio {
            let _ = audio.pause();
        }
    }

    fn is_paused(&self) -> bool {
        self.audio.as_ref().map(|a| a.paused()).unwrap_or(true)
    }

    fn has_source(&self) -> bool {
        self.audio
            .as_ref()
            .map(|a| !a.src().is_empty())
            .unwrap_or(false)
    }

    fn current_time(&self) -> f64 {
        self.audio.as_ref().map(|a| a.current_time()).unwrap_or(0.0)
    }

    fn duration(&self) -> f64 {
        self.audio.as_ref().map(|a| a.duration()).unwrap_or(f64::NAN)
    }

    fn set_current_time(&mut self, seconds: f64) {
        if let Some(audio) = &self.audio {
            audio.set_current_time(seconds);
        }
    }
}

/// Forwards `timeupdate`, `loadedmetadata` and `ended` from the page's audio
/// element into the playback controller.
#[component]
pub fn AudioController() -> Element {
    let playback = use_context::<Signal<Playback>>();

    use_effect(move || {
        let Some(audio) = get_or_create_audio_element() else {
            return;
        };

        let runtime = Runtime::current();

        let listen = |event: &str, handler: fn(&mut Playback)| {
            let runtime = runtime.clone();
            let mut playback = playback;
            let callback = Closure::wrap(Box::new(move || {
                let _guard = RuntimeGuard::new(runtime.clone());
                handler(&mut *playback.write());
            }) as Box<dyn FnMut()>);
            if let Err(err) =
                audio.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            {
                warn!(event, ?err, "failed to attach media listener");
            }
            callback.forget();
        };

        listen("timeupdate", Playback::on_time_update);
        listen("loadedmetadata", Playback::on_loaded_metadata);
        listen("ended", Playback::on_track_ended);
    });

    rsx! {}
}
