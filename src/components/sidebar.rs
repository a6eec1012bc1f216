use crate::components::{Icon, TrackList};
use crate::sidebar::SidebarState;
use dioxus::prelude::*;

/// Left panel: logo, close button for narrow viewports, and the queue.
#[component]
pub fn Sidebar() -> Element {
    let mut sidebar = use_context::<Signal<SidebarState>>();
    let state = sidebar();
    let offset = state.offset();

    rsx! {
        aside { class: "left", style: "left: {offset};",
            div { class: "left__header",
                div { class: "logo",
                    div { class: "logo__mark", "A" }
                    h1 { class: "logo__title", "AlbumDeck" }
                }
                if state.shows_close_button() {
                    button {
                        class: "close",
                        r#type: "button",
                        aria_label: "Close menu",
                        onclick: move |_| sidebar.write().close(),
                        Icon { name: "x".to_string(), class: "icon-sm".to_string() }
                    }
                }
            }

            div { class: "library",
                div { class: "library__heading",
                    Icon { name: "music".to_string(), class: "icon-sm".to_string() }
                    h2 { "Your Library" }
                }
                TrackList {}
            }
        }
    }
}

/// Hamburger trigger shown in the main header.
#[component]
pub fn SidebarToggle() -> Element {
    let mut sidebar = use_context::<Signal<SidebarState>>();

    rsx! {
        button {
            class: "hamburger",
            r#type: "button",
            aria_label: "Open menu",
            onclick: move |_| sidebar.write().open(),
            Icon { name: "menu".to_string(), class: "icon-md".to_string() }
        }
    }
}
