use crate::components::browser::scroll_to_section;
use crate::components::{Icon, Route};
use crate::config;
use dioxus::prelude::*;
use dioxus::router::Navigator;

#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::window;

const SCROLL_BLUR_THRESHOLD: f64 = 12.0;

/// A header nav destination: either a named section on the home page or a
/// routed page of its own.
#[derive(Clone, Copy, PartialEq)]
enum NavTarget {
    Section(&'static str),
    Works,
}

const NAV_LINKS: [(&str, &str, NavTarget); 4] = [
    ("Demos", "/#demos", NavTarget::Section("demos")),
    ("Narrated Works", "/narrated-works", NavTarget::Works),
    ("About", "/#about", NavTarget::Section("about")),
    ("Contact", "/#contact", NavTarget::Section("contact")),
];

/// Scroll straight to the section when already on the home route; otherwise
/// navigate home first and scroll once the view has mounted.
fn open_section(navigator: Navigator, on_home: bool, id: &'static str) {
    if on_home {
        scroll_to_section(id);
        return;
    }
    navigator.push(Route::Home {});
    #[cfg(target_arch = "wasm32")]
    spawn(async move {
        gloo_timers::future::TimeoutFuture::new(100).await;
        scroll_to_section(id);
    });
}

#[component]
pub fn Header() -> Element {
    let mut is_open = use_signal(|| false);
    let is_scrolled = use_signal(|| false);
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let on_home = matches!(route, Route::Home {});

    // Escape closes the mobile menu; scrolling past the threshold swaps the
    // header background in. Both are window-level listeners, wired once.
    #[cfg(target_arch = "wasm32")]
    {
        let mut is_open = is_open.clone();
        let mut is_scrolled = is_scrolled.clone();
        use_effect(move || {
            let Some(win) = window() else {
                return;
            };
            let runtime = Runtime::current();

            let key_runtime = runtime.clone();
            let key_cb = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                let _guard = RuntimeGuard::new(key_runtime.clone());
                if e.key() == "Escape" {
                    is_open.set(false);
                }
            }) as Box<dyn FnMut(_)>);

            let scroll_runtime = runtime.clone();
            let scroll_win = win.clone();
            let scroll_cb = Closure::wrap(Box::new(move || {
                let _guard = RuntimeGuard::new(scroll_runtime.clone());
                let y = scroll_win.scroll_y().unwrap_or(0.0);
                let scrolled = y > SCROLL_BLUR_THRESHOLD;
                if *is_scrolled.peek() != scrolled {
                    is_scrolled.set(scrolled);
                }
            }) as Box<dyn FnMut()>);

            let _ = win.add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref());
            let _ =
                win.add_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref());
            key_cb.forget();
            scroll_cb.forget();
        });
    }

    let nav_for_links = navigator.clone();
    let on_nav_click = move |target: NavTarget| {
        let navigator = nav_for_links.clone();
        move |evt: MouseEvent| {
            is_open.set(false);
            evt.prevent_default();
            match target {
                NavTarget::Section(id) => open_section(navigator.clone(), on_home, id),
                NavTarget::Works => {
                    navigator.push(Route::NarratedWorks {});
                }
            }
        }
    };

    let is_active = move |target: NavTarget| match target {
        NavTarget::Section(_) => on_home,
        NavTarget::Works => matches!(route, Route::NarratedWorks {}),
    };

    let header_class = if is_scrolled() {
        "bg-[#050814]/55 backdrop-blur-xl border-b border-white/10 shadow-lg"
    } else {
        "bg-transparent border-b border-white/10"
    };

    rsx! {
        header { class: "sticky top-0 z-50 transition-all duration-200 {header_class}",
            div { class: "max-w-6xl mx-auto px-5 sm:px-6 h-16 flex items-center justify-between",
                // Brand
                a {
                    href: "/",
                    class: "flex items-center gap-3 group",
                    onclick: {
                        let navigator = navigator.clone();
                        move |evt: MouseEvent| {
                            evt.prevent_default();
                            is_open.set(false);
                            navigator.push(Route::Home {});
                        }
                    },
                    div { class: "h-9 w-9 rounded-full border border-white/15 bg-white/5 flex items-center justify-center text-sm font-semibold text-white transition group-hover:border-[#D4AF37]/50 group-hover:bg-[#D4AF37]/10",
                        "DM"
                    }
                    div { class: "leading-tight",
                        p { class: "text-sm font-semibold text-white", "Dean Miller" }
                        p { class: "text-xs text-white/60", "Audiobook Narrator" }
                    }
                }

                div { class: "flex items-center gap-4 sm:gap-6",
                    // Desktop nav
                    nav { class: "hidden md:flex items-center gap-6 text-sm",
                        for (name , href , target) in NAV_LINKS {
                            a {
                                key: "{name}",
                                href,
                                class: if is_active(target) { "relative px-1 py-2 text-white transition" } else { "relative px-1 py-2 text-white/80 hover:text-white transition" },
                                onclick: on_nav_click(target),
                                "{name}"
                                span { class: if is_active(target) { "pointer-events-none absolute left-0 right-0 -bottom-[2px] h-[2px] rounded-full bg-[#D4AF37]/80" } else { "pointer-events-none absolute left-0 right-0 -bottom-[2px] h-[2px] rounded-full bg-transparent" } }
                            }
                        }
                    }

                    // Desktop booking CTA
                    a {
                        href: config::BOOKING_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "hidden md:inline-flex items-center justify-center rounded-md border border-white/20 px-4 py-2 text-sm font-semibold text-white/90 hover:border-[#D4AF37]/60 hover:bg-white/10 hover:text-white transition",
                        "Request availability"
                    }

                    // Social links
                    div { class: "hidden md:flex items-center gap-4",
                        a {
                            href: config::TIKTOK_URL,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            aria_label: "TikTok",
                            class: "text-white/80 hover:text-[#D4AF37] transition",
                            Icon { name: "tiktok".to_string(), class: "w-5 h-5".to_string() }
                        }
                        a {
                            href: config::INSTAGRAM_URL,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            aria_label: "Instagram",
                            class: "text-white/80 hover:text-[#D4AF37] transition",
                            Icon { name: "instagram".to_string(), class: "w-5 h-5".to_string() }
                        }
                        a {
                            href: config::DISCORD_URL,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            aria_label: "Discord",
                            class: "text-white/80 hover:text-[#D4AF37] transition",
                            Icon { name: "discord".to_string(), class: "w-5 h-5".to_string() }
                        }
                    }

                    // Hamburger
                    button {
                        class: "md:hidden p-2 text-white/80 hover:text-white transition",
                        aria_label: "Toggle Menu",
                        aria_expanded: is_open(),
                        onclick: move |_| is_open.set(!is_open()),
                        if is_open() {
                            Icon { name: "close".to_string(), class: "w-6 h-6".to_string() }
                        } else {
                            Icon { name: "menu".to_string(), class: "w-6 h-6".to_string() }
                        }
                    }
                }
            }

            // Mobile menu
            if is_open() {
                div { class: "md:hidden border-t border-white/10 bg-[#050814]/75 backdrop-blur-xl",
                    nav { class: "max-w-6xl mx-auto px-5 sm:px-6 py-4",
                        div { class: "grid gap-2",
                            for (name , href , target) in NAV_LINKS {
                                a {
                                    key: "{name}",
                                    href,
                                    class: "rounded-lg px-3 py-3 text-white/85 hover:text-white hover:bg-white/5 transition text-base font-medium",
                                    onclick: on_nav_click(target),
                                    "{name}"
                                }
                            }
                        }
                        div { class: "mt-4 grid gap-3",
                            a {
                                href: "/#demos",
                                class: "inline-flex items-center justify-center rounded-md bg-[#D4AF37] text-black px-4 py-3 font-semibold transition hover:bg-[#E0C15A]",
                                onclick: on_nav_click(NavTarget::Section("demos")),
                                "Listen to demos"
                            }
                            a {
                                href: config::BOOKING_URL,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                class: "inline-flex items-center justify-center rounded-md border border-white/20 px-4 py-3 font-semibold text-white/90 hover:border-[#D4AF37]/60 hover:text-white transition",
                                "Request availability"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_hrefs_match_their_targets() {
        for (_, href, target) in NAV_LINKS {
            match target {
                NavTarget::Section(id) => assert_eq!(href, format!("/#{id}")),
                NavTarget::Works => assert_eq!(href, "/narrated-works"),
            }
        }
    }
}
