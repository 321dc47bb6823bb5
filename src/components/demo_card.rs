use crate::components::Icon;
use crate::playback::{
    attach_media_listeners, demo_audio_id, format_time, Coordinator, DemoEntry, WebDeck,
};
use crate::utils::slugify;
use dioxus::prelude::*;

/// The featured-demos grid. The coordinator signal is owned by the home
/// view, so all playback state dies with the page.
#[component]
pub fn DemoGrid(coordinator: Signal<Coordinator>) -> Element {
    let entries: Vec<DemoEntry> = coordinator.read().entries().to_vec();

    rsx! {
        div { class: "mt-8 grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
            for (index , entry) in entries.into_iter().enumerate() {
                DemoCard {
                    key: "{slugify(&entry.title)}",
                    coordinator,
                    index,
                    entry,
                }
            }
        }
    }
}

/// One demo card: either a working player or a placeholder when the clip
/// has no source yet.
#[component]
fn DemoCard(coordinator: Signal<Coordinator>, index: usize, entry: DemoEntry) -> Element {
    let has_source = entry.has_source();

    // Wire the audio element's DOM events into the coordinator once the
    // card is in the document.
    {
        let coordinator = coordinator.clone();
        use_effect(move || {
            if has_source {
                attach_media_listeners(index, coordinator);
            }
        });
    }

    let state = coordinator.read().state(index);
    let seekable = state.duration > 0.0;
    let progress = if seekable {
        ((state.position / state.duration) * 100.0).round() as i32
    } else {
        0
    };

    let on_toggle = move |_| {
        let mut deck = WebDeck::new(coordinator);
        coordinator.write().toggle(index, &mut deck);
    };

    let on_seek = move |e: Event<FormData>| {
        if let Ok(percent) = e.value().parse::<f64>() {
            let mut deck = WebDeck::new(coordinator);
            coordinator.write().seek(index, percent / 100.0, &mut deck);
        }
    };

    rsx! {
        div { class: "rounded-2xl border border-[#1A2550] bg-[#0B1224] p-6 shadow-lg hover:border-[#D4AF37]/50 transition",
            p { class: "font-semibold text-lg text-white", "{entry.title}" }
            p { class: "mt-1 text-sm text-white/70", "{entry.description}" }

            if has_source {
                div { class: "mt-4 rounded-lg bg-[#050814] p-3 border border-[#1A2550]",
                    audio {
                        id: "{demo_audio_id(index)}",
                        preload: "metadata",
                        src: entry.audio_source.as_deref().unwrap_or_default(),
                    }
                    div { class: "flex items-center gap-3",
                        button {
                            r#type: "button",
                            class: "w-10 h-10 flex-shrink-0 rounded-full bg-[#D4AF37] text-black flex items-center justify-center hover:bg-[#E0C15A] transition shadow-lg",
                            aria_label: if state.playing { "Pause {entry.title} demo" } else { "Play {entry.title} demo" },
                            onclick: on_toggle,
                            if state.buffering {
                                Icon { name: "loader".to_string(), class: "w-5 h-5".to_string() }
                            } else if state.playing {
                                Icon { name: "pause".to_string(), class: "w-5 h-5".to_string() }
                            } else {
                                Icon { name: "play".to_string(), class: "w-5 h-5 ml-0.5".to_string() }
                            }
                        }
                        div { class: "flex-1 flex items-center gap-2",
                            span { class: "text-xs text-white/60 w-9 text-right",
                                {format_time(state.position)}
                            }
                            input {
                                r#type: "range",
                                min: "0",
                                max: "100",
                                disabled: !seekable,
                                value: progress,
                                aria_label: "Seek within {entry.title} demo",
                                class: "demo-seek flex-1 w-full",
                                style: "--seek-progress: {progress}%",
                                oninput: on_seek,
                            }
                            span { class: "text-xs text-white/60 w-9",
                                {format_time(state.duration)}
                            }
                        }
                    }
                }
            } else {
                div { class: "mt-4 rounded-lg border border-[#1A2550] bg-[#050814] p-4",
                    p { class: "text-sm text-white/70", "Demo not yet available." }
                    p { class: "mt-1 text-xs text-white/50", "A clip for this style is on the way." }
                }
            }
        }
    }
}
