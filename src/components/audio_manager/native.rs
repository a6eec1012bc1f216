// Desktop media backend: the webview hosts the <audio> element, Rust drives it
// through `document::eval` and polls a snapshot to raise the same callbacks
// the browser backend gets from DOM events.
use super::Playback;
use crate::playback::MediaElement;
use dioxus::prelude::*;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

const AUDIO_BRIDGE_BOOTSTRAP_JS: &str = r#"
(() => {
  if (window.__albumdeckAudio) {
    return true;
  }

  const audio = document.createElement("audio");
  audio.id = "albumdeck-audio";
  audio.preload = "metadata";
  audio.style.display = "none";
  document.body.appendChild(audio);

  window.__albumdeckAudio = {
    apply(cmd) {
      if (!cmd || !cmd.type) return;
      switch (cmd.type) {
        case "src":
          audio.src = cmd.url;
          break;
        case "play":
          audio.play().catch(() => {});
          break;
        case "pause":
          audio.pause();
          break;
        case "seek":
          if (Number.isFinite(cmd.position)) {
            audio.currentTime = cmd.position;
          }
          break;
      }
    },
    snapshot() {
      return {
        has_source: !!audio.getAttribute("src"),
        current_time: Number.isFinite(audio.currentTime) ? audio.currentTime : 0,
        duration: Number.isFinite(audio.duration) ? audio.duration : null,
        paused: !!audio.paused,
        ended: !!audio.ended,
      };
    },
  };
  return true;
})();
"#;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
struct AudioSnapshot {
    has_source: bool,
    current_time: f64,
    duration: Option<f64>,
    paused: bool,
    ended: bool,
}

fn ensure_audio_bridge() {
    let _ = document::eval(AUDIO_BRIDGE_BOOTSTRAP_JS);
}

fn audio_command(value: serde_json::Value) {
    ensure_audio_bridge();
    let script = format!(
        r#"(function () {{
            const bridge = window.__albumdeckAudio;
            if (!bridge) return false;
            bridge.apply({value});
            return true;
        }})();"#
    );
    let _ = document::eval(&script);
}

async fn audio_snapshot() -> Option<AudioSnapshot> {
    ensure_audio_bridge();
    let eval = document::eval(
        r#"const bridge = window.__albumdeckAudio;
        return bridge ? bridge.snapshot() : null;"#,
    );
    eval.join::<Option<AudioSnapshot>>().await.ok().flatten()
}

/// Mirror of the webview's audio element. Commands are sent straight away and
/// applied optimistically; the poller reconciles with the real state.
#[derive(Debug, Default)]
pub struct AudioElement {
    state: AudioSnapshot,
}

impl AudioElement {
    pub fn attach() -> Self {
        Self::default()
    }

    fn apply_snapshot(&mut self, snapshot: AudioSnapshot) {
        self.state = snapshot;
    }
}

impl MediaElement for AudioElement {
    fn set_source(&mut self, url: &str) {
        audio_command(serde_json::json!({ "type": "src", "url": url }));
        self.state = AudioSnapshot {
            has_source: true,
            paused: true,
            ..AudioSnapshot::default()
        };
    }

    fn play(&mut self) {
        audio_command(serde_json::json!({ "type": "play" }));
        self.state.paused = false;
    }

    fn pause(&mut self) {
        audio_command(serde_json::json!({ "type": "pause" }));
        self.state.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.state.paused
    }

    fn has_source(&self) -> bool {
        self.state.has_source
    }

    fn current_time(&self) -> f64 {
        self.state.current_time
    }

    fn duration(&self) -> f64 {
        self.state.duration.unwrap_or(f64::NAN)
    }

    fn set_current_time(&mut self, seconds: f64) {
        audio_command(serde_json::json!({ "type": "seek", "position": seconds }));
        self.state.current_time = seconds;
    }
}

/// Polls the webview audio element and turns snapshot changes into controller
/// callbacks.
#[component]
pub fn AudioController() -> Element {
    let mut playback = use_context::<Signal<Playback>>();

    use_effect(move || {
        ensure_audio_bridge();

        spawn(async move {
            let mut last = AudioSnapshot::default();
            loop {
                tokio::time::sleep(POLL_INTERVAL).await;

                let Some(snapshot) = audio_snapshot().await else {
                    continue;
                };
                if snapshot == last {
                    continue;
                }

                let metadata_loaded = last.duration.is_none() && snapshot.duration.is_some();
                let time_moved = snapshot.current_time != last.current_time;
                let just_ended = snapshot.ended && !last.ended;
                last = snapshot.clone();

                let mut controller = playback.write();
                controller.media_mut().apply_snapshot(snapshot);
                if metadata_loaded {
                    controller.on_loaded_metadata();
                }
                if time_moved {
                    controller.on_time_update();
                }
                if just_ended {
                    debug!("track ended");
                    controller.on_track_ended();
                }
            }
        });
    });

    rsx! {}
}
