use super::seo;
use super::views::{Home, NarratedWorks, NarratorProfile};
use crate::components::Header;
use crate::config;
use chrono::Datelike;
use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[layout(SiteShell)]
    #[route("/")]
    Home {},
    #[route("/audiobook-narrator")]
    NarratorProfile {},
    #[route("/narrated-works")]
    NarratedWorks {},
}

/// Shared chrome around every routed view: sticky header, routed body,
/// footer, and the structured-data script for crawlers.
#[component]
fn SiteShell() -> Element {
    rsx! {
        div { class: "min-h-screen bg-[#050814] text-white",
            Header {}

            Outlet::<Route> {}

            SiteFooter {}
        }

        document::Script { r#type: "application/ld+json", {seo::person_json_ld()} }
    }
}

#[component]
fn SiteFooter() -> Element {
    let year = chrono::Utc::now().year();

    rsx! {
        footer { class: "max-w-6xl mx-auto px-6 py-10 text-sm text-white/50",
            div { class: "flex flex-col sm:flex-row items-center justify-between gap-3",
                p { "© {year} Dean Miller. All rights reserved." }
                a {
                    class: "hover:text-white/80 transition",
                    href: "mailto:{config::CONTACT_EMAIL}",
                    "{config::CONTACT_EMAIL}"
                }
            }
        }
    }
}
