//! Thin browser helpers shared by the page components. All of them are
//! wasm-gated with inert host stand-ins so views render on any target.

#[cfg(target_arch = "wasm32")]
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};

/// Smooth-scroll the element with `id` into view, if it exists.
#[cfg(target_arch = "wasm32")]
pub fn scroll_to_section(id: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(element) = document.get_element_by_id(id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to_section(_id: &str) {}

/// Fragment of the current location, without the leading `#`.
#[cfg(target_arch = "wasm32")]
pub fn location_hash() -> Option<String> {
    let hash = window()?.location().hash().ok()?;
    let id = hash.strip_prefix('#').unwrap_or(&hash);
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn location_hash() -> Option<String> {
    None
}

/// True when the form handler redirected back with `sent=1` in the query.
#[cfg(target_arch = "wasm32")]
pub fn inquiry_sent() -> bool {
    let Some(search) = window().and_then(|w| w.location().search().ok()) else {
        return false;
    };
    search
        .trim_start_matches('?')
        .split('&')
        .any(|pair| pair == "sent=1")
}

#[cfg(not(target_arch = "wasm32"))]
pub fn inquiry_sent() -> bool {
    false
}

#[cfg(target_arch = "wasm32")]
pub fn scroll_left(id: &str) -> i32 {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .map(|e| e.scroll_left())
        .unwrap_or(0)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_left(_id: &str) -> i32 {
    0
}

#[cfg(target_arch = "wasm32")]
pub fn set_scroll_left(id: &str, value: i32) {
    if let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        element.set_scroll_left(value);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_scroll_left(_id: &str, _value: i32) {}
