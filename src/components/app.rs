use crate::components::{
    AudioController, AudioElement, CardGrid, FolderLoader, Playback, Player, Sidebar,
    SidebarToggle,
};
use crate::config::PlayerConfig;
use crate::sidebar::SidebarState;
use crate::tracks::LoadGeneration;
use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys::window;

#[cfg(target_arch = "wasm32")]
fn initial_viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

// The desktop webview reports its size through the first resize event.
#[cfg(not(target_arch = "wasm32"))]
fn initial_viewport_width() -> f64 {
    0.0
}

#[component]
pub fn AppShell() -> Element {
    let config = use_hook(PlayerConfig::default);
    let playback = use_signal(|| Playback::new(AudioElement::attach()));
    let generation = use_signal(LoadGeneration::default);
    let breakpoint = config.sidebar_breakpoint;
    let mut sidebar = use_signal(|| SidebarState::new(initial_viewport_width(), breakpoint));
    let loader = FolderLoader::new(config.clone(), playback, generation);

    // Provide state via context
    use_context_provider(|| config.clone());
    use_context_provider(|| playback);
    use_context_provider(|| sidebar);
    use_context_provider(|| loader.clone());

    // Load the default folder's queue on mount
    {
        let loader = loader.clone();
        let default_folder = config.default_folder.clone();
        use_effect(move || {
            if let Some(folder) = default_folder.clone() {
                loader.select(folder);
            }
        });
    }

    let compact = sidebar().shows_close_button();

    rsx! {
        div {
            class: "container",
            onresize: move |evt: Event<ResizeData>| {
                if let Ok(size) = evt.data().get_border_box_size() {
                    sidebar.write().resize(size.width);
                }
            },

            Sidebar {}

            div { class: "right",
                header { class: "header",
                    if compact {
                        SidebarToggle {}
                    }
                    h1 { class: "header__title", "Albums" }
                }

                main { class: "main-scroll",
                    CardGrid {}
                }
            }

            // Fixed bottom player
            Player {}
        }

        // Audio controller - bridges the media element and the controller
        AudioController {}
    }
}
