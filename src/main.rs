use dioxus::prelude::*;

mod components;
mod config;
mod playback;
mod utils;

use components::Route;

const SITE_CSS: Asset = asset!("/assets/styling/site.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link {
            rel: "icon",
            r#type: "image/png",
            href: config::media_url("dean-profile.png"),
        }

        document::Meta { name: "theme-color", content: "#050814" }
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1",
        }

        document::Stylesheet { href: TAILWIND_CSS }
        document::Stylesheet { href: SITE_CSS }

        Router::<Route> {}
    }
}
