use dioxus::prelude::*;
use tracing::Level;

mod api;
mod catalog;
mod components;
mod config;
mod error;
mod playback;
mod sidebar;
mod tracks;

use components::AppShell;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("failed to initialize logger: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "AlbumDeck" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Meta { name: "theme-color", content: "#121212" }

        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}
