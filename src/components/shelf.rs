use crate::components::browser::{scroll_left, set_scroll_left};
use crate::config::Book;
use dioxus::prelude::*;

/// Pointer-drag threshold in pixels before a press counts as a scroll
/// instead of a click on a cover.
const DRAG_THRESHOLD: f64 = 4.0;

/// A horizontally scrollable row of book covers that can be dragged with
/// mouse or touch. Native overflow scrolling still works; the pointer
/// handlers just add click-and-drag on top of it.
#[component]
pub fn BookShelf(id: &'static str, books: Vec<Book>, badge: Option<&'static str>) -> Element {
    let mut drag_origin = use_signal(|| None::<(f64, i32)>);
    let mut drag_moved = use_signal(|| false);
    let mut dragging = use_signal(|| false);

    let track_id = format!("shelf-{id}");
    let scroller = track_id.clone();

    let end_drag = move |_| {
        drag_origin.set(None);
        dragging.set(false);
    };

    rsx! {
        div { class: "relative",
            div {
                id: "{track_id}",
                class: if dragging() {
                    "flex gap-5 overflow-x-auto pb-4 hide-scrollbar cursor-grabbing select-none"
                } else {
                    "flex gap-5 overflow-x-auto pb-4 hide-scrollbar cursor-grab"
                },

                onpointerdown: {
                    let scroller = scroller.clone();
                    move |event: Event<PointerData>| {
                        let x = event.data().client_coordinates().x;
                        drag_origin.set(Some((x, scroll_left(&scroller))));
                        drag_moved.set(false);
                        dragging.set(true);
                    }
                },
                onpointermove: {
                    let scroller = scroller.clone();
                    move |event: Event<PointerData>| {
                        if let Some((start_x, start_scroll)) = drag_origin() {
                            let delta = event.data().client_coordinates().x - start_x;
                            if delta.abs() > DRAG_THRESHOLD {
                                drag_moved.set(true);
                            }
                            set_scroll_left(&scroller, start_scroll - delta as i32);
                        }
                    }
                },
                onpointerup: end_drag,
                onpointercancel: end_drag,
                onpointerleave: end_drag,

                for book in books.iter() {
                    BookCard {
                        key: "{book.link}",
                        book: book.clone(),
                        badge,
                        drag_moved,
                    }
                }
            }

            // Edge fades hint that the row keeps going.
            div { class: "pointer-events-none absolute inset-y-0 left-0 w-8 bg-gradient-to-r from-[#050814] to-transparent" }
            div { class: "pointer-events-none absolute inset-y-0 right-0 w-8 bg-gradient-to-l from-[#050814] to-transparent" }
        }
    }
}

#[component]
fn BookCard(book: Book, badge: Option<&'static str>, drag_moved: Signal<bool>) -> Element {
    rsx! {
        a {
            href: "{book.link}",
            target: "_blank",
            rel: "noopener noreferrer",
            class: "group w-40 sm:w-44 flex-shrink-0",
            draggable: "false",
            onclick: move |event| {
                // A drag that moved the shelf must not open the store page.
                if drag_moved() {
                    event.prevent_default();
                }
            },

            div { class: "relative rounded-lg overflow-hidden border border-[#1A2550] bg-[#0B1224] shadow-lg",
                img {
                    src: "{book.cover_url()}",
                    alt: "Cover of {book.title}",
                    loading: "lazy",
                    draggable: "false",
                    class: "w-40 sm:w-44 h-60 sm:h-64 object-cover group-hover:scale-[1.03] transition-transform duration-300",
                }
                if let Some(label) = badge {
                    span { class: "absolute top-2 left-2 rounded bg-[#D4AF37] px-2 py-0.5 text-[11px] font-semibold text-black",
                        "{label}"
                    }
                }
            }

            div { class: "mt-3",
                p { class: "text-sm font-semibold text-white leading-snug", "{book.title}" }
                if let Some(subtitle) = &book.subtitle {
                    p { class: "text-xs text-white/60 leading-snug", "{subtitle}" }
                }
                p { class: "mt-1 text-xs text-white/50", "by {book.author}" }
            }
        }
    }
}
