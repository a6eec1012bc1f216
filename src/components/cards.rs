use crate::api::{FolderDescriptor, HttpLibrary};
use crate::catalog::load_catalog;
use crate::components::{FolderLoader, Icon};
use crate::config::PlayerConfig;
use dioxus::prelude::*;

#[component]
pub fn CardGrid() -> Element {
    let config = use_context::<PlayerConfig>();
    let loader = use_context::<FolderLoader>();

    let cards = use_resource(move || {
        let config = config.clone();
        async move {
            let library = HttpLibrary::new(config.clone());
            load_catalog(&library, &config.catalog).await
        }
    });

    rsx! {
        {match cards() {
            Some(cards) if cards.is_empty() => rsx! {
                div { class: "empty-state",
                    Icon { name: "album".to_string(), class: "icon-xl".to_string() }
                    p { "No albums found" }
                }
            },
            Some(cards) => rsx! {
                div { class: "cardContainer",
                    for card in cards {
                        FolderCard {
                            key: "{card.key}",
                            card: card.clone(),
                            onclick: {
                                let loader = loader.clone();
                                let folder = card.key.clone();
                                move |_| loader.select(folder.clone())
                            },
                        }
                    }
                }
            },
            None => rsx! {
                div { class: "empty-state",
                    Icon { name: "loader".to_string(), class: "icon-lg".to_string() }
                }
            },
        }}
    }
}

#[component]
fn FolderCard(card: FolderDescriptor, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div {
            class: "card",
            "data-folder": "{card.key}",
            onclick: move |e| onclick.call(e),
            div { class: "play",
                Icon { name: "play".to_string(), class: "icon-sm".to_string() }
            }
            img { src: "{card.image_url}", alt: "{card.title}" }
            h2 { "{card.title}" }
            p { "{card.description}" }
        }
    }
}
