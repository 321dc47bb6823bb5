use crate::components::icons::Icon;
use crate::config;
use dioxus::prelude::*;

/// Static landing page targeting "audiobook narrator" searches. Pure copy,
/// no interactive state.
#[component]
pub fn NarratorProfile() -> Element {
    rsx! {
        document::Title { "Hire an Audiobook Narrator | Dean Miller" }
        document::Meta {
            name: "description",
            content: "Dean Miller is a male audiobook narrator for hire, specializing in romance, dark romance, and romantasy. Treated studio, retail-ready files, dependable turnaround.",
        }
        document::Link { rel: "canonical", href: "{config::SITE_URL}/audiobook-narrator" }

        main { class: "mx-auto max-w-4xl px-4 pt-28 pb-16 text-white",
            h1 { class: "text-4xl font-extrabold leading-tight",
                "A male audiobook narrator who lives in romance"
            }
            p { class: "mt-5 text-lg text-white/70",
                "Dean Miller narrates romance, dark romance, and romantasy full time. \
                 If your book trades in tension, longing, or morally gray heroes, it is \
                 squarely in his range."
            }

            section { class: "mt-12",
                h2 { class: "text-2xl font-bold", "What you get" }
                ul { class: "mt-4 space-y-3 text-white/80",
                    li { "Character voices that stay consistent across a whole series." }
                    li { "Accent work, including British and regional American." }
                    li { "Dual-POV and duet-ready performance." }
                    li { "Files mastered to ACX and Findaway retail specs." }
                    li { "A delivery date agreed before recording starts, then kept." }
                }
            }

            section { class: "mt-12",
                h2 { class: "text-2xl font-bold", "How a project runs" }
                ol { class: "mt-4 space-y-3 text-white/80 list-decimal list-inside",
                    li { "You send the manuscript, deadline, and character notes." }
                    li { "Dean records a short custom sample from your book." }
                    li { "On approval, production starts against the agreed schedule." }
                    li { "You receive chapters for review, then final mastered files." }
                }
            }

            section { class: "mt-12 rounded-2xl border border-[#1A2550] bg-[#0B1224] p-8",
                h2 { class: "text-2xl font-bold", "Hear it first" }
                p { class: "mt-2 text-white/70",
                    "The fastest way to know if the voice fits your book is to listen."
                }
                div { class: "mt-5 flex flex-wrap gap-4",
                    a {
                        href: "/#demos",
                        class: "inline-flex items-center gap-2 rounded-md bg-[#D4AF37] text-black px-6 py-3 font-semibold hover:bg-[#E0C15A] transition",
                        Icon { name: "play".to_string(), class: "w-4 h-4".to_string() }
                        "Play the demos"
                    }
                    a {
                        href: "/#contact",
                        class: "inline-flex items-center gap-2 rounded-md border border-[#D4AF37]/60 px-6 py-3 font-semibold text-[#D4AF37] hover:bg-[#D4AF37]/10 transition",
                        Icon { name: "mail".to_string(), class: "w-4 h-4".to_string() }
                        "Request a custom sample"
                    }
                }
            }
        }
    }
}
