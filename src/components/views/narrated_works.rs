use crate::components::icons::Icon;
use crate::components::shelf::BookShelf;
use crate::config;
use dioxus::prelude::*;

/// Portfolio page: three draggable shelves of narrated audiobooks.
#[component]
pub fn NarratedWorks() -> Element {
    rsx! {
        document::Title { "Narrated Works | Dean Miller - Audiobook Narrator" }
        document::Meta {
            name: "description",
            content: "Audiobooks narrated by Dean Miller: completed titles, books currently in production, and upcoming releases.",
        }
        document::Link { rel: "canonical", href: "{config::SITE_URL}/narrated-works" }

        main { class: "mx-auto max-w-6xl px-4 pt-28 pb-16 text-white",
            h1 { class: "text-4xl font-extrabold", "Narrated Works" }
            p { class: "mt-3 text-white/70 max-w-2xl",
                "Every title Dean has voiced, plus what is on the schedule next. \
                 Covers link to the store page. Drag a row to browse."
            }

            section { class: "mt-12",
                h2 { class: "text-2xl font-bold", "Completed" }
                div { class: "mt-5",
                    BookShelf { id: "completed", books: config::COMPLETED_WORKS.clone() }
                }
            }

            section { class: "mt-12",
                h2 { class: "text-2xl font-bold", "Currently Narrating" }
                div { class: "mt-5",
                    BookShelf {
                        id: "in-progress",
                        books: config::IN_PROGRESS_WORKS.clone(),
                        badge: "In Progress",
                    }
                }
            }

            section { class: "mt-12",
                h2 { class: "text-2xl font-bold", "Coming Soon" }
                div { class: "mt-5",
                    BookShelf {
                        id: "coming-soon",
                        books: config::COMING_SOON_WORKS.clone(),
                        badge: "Coming Soon",
                    }
                }
            }

            section { class: "mt-16 rounded-2xl border border-[#1A2550] bg-[#0B1224] p-8 text-center",
                h2 { class: "text-2xl font-bold", "Have a book that belongs here?" }
                p { class: "mt-2 text-white/70",
                    "Send the details and Dean will come back with availability and a quote."
                }
                a {
                    href: "/#contact",
                    class: "mt-5 inline-flex items-center gap-2 rounded-md bg-[#D4AF37] text-black px-6 py-3 font-semibold hover:bg-[#E0C15A] transition",
                    Icon { name: "mail".to_string(), class: "w-4 h-4".to_string() }
                    "Start an inquiry"
                }
            }
        }
    }
}
