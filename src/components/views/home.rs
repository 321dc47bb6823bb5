use crate::components::browser::{location_hash, scroll_to_section};
use crate::components::contact::ContactSection;
use crate::components::demo_card::DemoGrid;
use crate::components::icons::Icon;
use crate::config;
use crate::playback::Coordinator;
use dioxus::prelude::*;

/// Landing page. Owns the playback [`Coordinator`] for the demo grid; the
/// coordinator lives exactly as long as this view does.
#[component]
pub fn Home() -> Element {
    let coordinator = use_signal(|| Coordinator::new(config::DEMOS.clone()));

    // Deep links like /#demos arrive before the sections exist; give the DOM
    // a beat to mount, then scroll.
    use_effect(move || {
        if let Some(id) = location_hash() {
            spawn(async move {
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::TimeoutFuture::new(100).await;
                scroll_to_section(&id);
            });
        }
    });

    rsx! {
        document::Title { "Dean Miller | Audiobook Narrator - Romance, Dark Romance & Romantasy" }
        document::Meta {
            name: "description",
            content: "Dean Miller is a professional audiobook narrator specializing in romance, dark romance, and romantasy. Listen to demos and request availability.",
        }
        document::Link { rel: "canonical", href: "{config::SITE_URL}/" }

        main { class: "mx-auto max-w-6xl px-4 pt-28 pb-16 text-white",
            Hero {}

            section { id: "demos", class: "mt-20 scroll-mt-28",
                h2 { class: "text-3xl font-bold", "Listen to the demos" }
                p { class: "mt-2 text-white/70",
                    "Short clips across the genres I narrate most. One plays at a time."
                }
                DemoGrid { coordinator }
            }

            TikTokCallout {}
            About {}
            ContactSection {}
        }
    }
}

#[component]
fn Hero() -> Element {
    rsx! {
        section { class: "grid grid-cols-1 lg:grid-cols-[3fr_2fr] gap-10 items-center",
            div {
                p { class: "text-sm uppercase tracking-[0.3em] text-[#D4AF37]",
                    "Audiobook narrator"
                }
                h1 { class: "mt-3 text-4xl sm:text-5xl font-extrabold leading-tight",
                    "Voices that make readers "
                    span { class: "text-[#D4AF37]", "stay up past midnight" }
                }
                p { class: "mt-5 text-lg text-white/70 max-w-xl",
                    "Romance, dark romance, and romantasy narration with dual-POV range, \
                     accent work, and a delivery schedule you can plan a launch around."
                }

                div { class: "mt-8 flex flex-wrap gap-4",
                    a {
                        href: "#demos",
                        class: "inline-flex items-center gap-2 rounded-md bg-[#D4AF37] text-black px-6 py-3 font-semibold hover:bg-[#E0C15A] transition",
                        Icon { name: "play".to_string(), class: "w-4 h-4".to_string() }
                        "Hear the demos"
                    }
                    a {
                        href: config::BOOKING_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "inline-flex items-center gap-2 rounded-md border border-[#D4AF37]/60 px-6 py-3 font-semibold text-[#D4AF37] hover:bg-[#D4AF37]/10 transition",
                        "Request availability"
                        Icon { name: "external".to_string(), class: "w-4 h-4".to_string() }
                    }
                }

                div { class: "mt-10 grid grid-cols-1 sm:grid-cols-3 gap-4",
                    ValueCard {
                        title: "Genre-true delivery",
                        body: "Heat, tension, and banter calibrated to the book, not a house style.",
                    }
                    ValueCard {
                        title: "Clean, mastered audio",
                        body: "Retail-ready files that pass ACX and Findaway specs the first time.",
                    }
                    ValueCard {
                        title: "Reliable timeline",
                        body: "A production schedule agreed up front and kept.",
                    }
                }
            }

            div { class: "relative",
                img {
                    src: config::media_url("dean-banner.png"),
                    alt: "Dean Miller, audiobook narrator",
                    class: "w-full rounded-2xl border border-[#1A2550] shadow-2xl object-cover",
                }
                div { class: "absolute -bottom-4 left-4 right-4 rounded-xl border border-[#1A2550] bg-[#0B1224]/90 backdrop-blur px-4 py-3 flex items-center gap-3",
                    Icon { name: "music".to_string(), class: "w-5 h-5 text-[#D4AF37]".to_string() }
                    p { class: "text-sm text-white/80",
                        "Romance · Dark Romance · Romantasy · Thriller"
                    }
                }
            }
        }
    }
}

#[component]
fn ValueCard(title: &'static str, body: &'static str) -> Element {
    rsx! {
        div { class: "rounded-xl border border-[#1A2550] bg-[#0B1224] p-4",
            p { class: "font-semibold text-white", "{title}" }
            p { class: "mt-1 text-sm text-white/60", "{body}" }
        }
    }
}

#[component]
fn TikTokCallout() -> Element {
    rsx! {
        section { class: "mt-20 rounded-2xl border border-[#1A2550] bg-[#0B1224] p-8 flex flex-col sm:flex-row items-center justify-between gap-6",
            div {
                h2 { class: "text-2xl font-bold", "Behind the mic" }
                p { class: "mt-2 text-white/70 max-w-lg",
                    "Booth clips, accent work, and narration snippets land on TikTok first. \
                     Follow {config::TIKTOK_HANDLE} to hear works in progress."
                }
            }
            a {
                href: config::TIKTOK_URL,
                target: "_blank",
                rel: "noopener noreferrer",
                class: "inline-flex items-center gap-2 rounded-md border border-[#D4AF37]/60 px-6 py-3 font-semibold text-[#D4AF37] hover:bg-[#D4AF37]/10 transition whitespace-nowrap",
                Icon { name: "tiktok".to_string(), class: "w-4 h-4".to_string() }
                "{config::TIKTOK_HANDLE}"
            }
        }
    }
}

#[component]
fn About() -> Element {
    rsx! {
        section { id: "about", class: "mt-20 scroll-mt-28 grid grid-cols-1 md:grid-cols-[2fr_3fr] gap-10 items-start",
            img {
                src: config::media_url("dean-profile.png"),
                alt: "Portrait of Dean Miller",
                class: "w-full max-w-sm rounded-2xl border border-[#1A2550] shadow-xl object-cover",
            }
            div {
                h2 { class: "text-3xl font-bold", "About Dean" }
                p { class: "mt-4 text-white/70 leading-relaxed",
                    "Dean Miller narrates the books readers press on their friends: \
                     slow-burn romance, morally gray dark romance, and sweeping romantasy. \
                     His performances are built around character voices that hold steady \
                     across a series and emotional beats that land without melodrama."
                }
                p { class: "mt-4 text-white/70 leading-relaxed",
                    "He records in a treated home studio, delivers punch-and-roll clean \
                     narration, and works directly with indie authors and publishers alike. \
                     Accents, dual POV, and duet formats are all on the menu."
                }
                div { class: "mt-6 flex flex-wrap gap-3",
                    a {
                        class: "inline-flex items-center gap-2 text-[#D4AF37] hover:underline",
                        href: "/narrated-works",
                        "Browse narrated works"
                        Icon { name: "arrow-right".to_string(), class: "w-4 h-4".to_string() }
                    }
                }
            }
        }
    }
}
