//! Browser-backed [`MediaDeck`] over the per-demo `<audio>` elements.
//!
//! Each sourced demo card renders a hidden audio element whose DOM id is
//! derived from its index; this module finds those elements, drives them,
//! and translates their DOM events back into [`MediaEvent`]s for the
//! coordinator. Everything browser-specific is wasm-gated with inert
//! stand-ins so the crate still builds (and tests run) on the host.

use super::{Coordinator, MediaDeck, MediaEvent};
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, Event, HtmlAudioElement};

#[cfg(target_arch = "wasm32")]
const WIRED_MARKER: &str = "data-dmn-wired";

/// DOM id of the audio element backing the demo at `index`.
pub fn demo_audio_id(index: usize) -> String {
    format!("demo-audio-{index}")
}

#[cfg(target_arch = "wasm32")]
fn demo_audio_element(index: usize) -> Option<HtmlAudioElement> {
    let document = window()?.document()?;
    document
        .get_element_by_id(&demo_audio_id(index))?
        .dyn_into::<HtmlAudioElement>()
        .ok()
}

/// [`MediaDeck`] implementation over the rendered audio elements. Cheap to
/// construct; elements are looked up by id on every call so the deck never
/// outlives the DOM it drives.
#[derive(Clone, Copy)]
pub struct WebDeck {
    coordinator: Signal<Coordinator>,
}

impl WebDeck {
    pub fn new(coordinator: Signal<Coordinator>) -> Self {
        Self { coordinator }
    }
}

#[cfg(target_arch = "wasm32")]
impl MediaDeck for WebDeck {
    fn request_play(&mut self, index: usize) {
        let Some(audio) = demo_audio_element(index) else {
            deferred_dispatch(self.coordinator, index, MediaEvent::Failed);
            return;
        };
        match audio.play() {
            Ok(promise) => {
                let coordinator = self.coordinator;
                spawn(async move {
                    // Autoplay policy rejections and load failures land
                    // here; the card simply falls back to its play icon.
                    if wasm_bindgen_futures::JsFuture::from(promise).await.is_err() {
                        dispatch(coordinator, index, MediaEvent::Failed);
                    }
                });
            }
            // The coordinator may still hold its write borrow, so report
            // the failure on the next tick.
            Err(_) => deferred_dispatch(self.coordinator, index, MediaEvent::Failed),
        }
    }

    fn pause(&mut self, index: usize) {
        if let Some(audio) = demo_audio_element(index) {
            let _ = audio.pause();
        }
    }

    fn set_position(&mut self, index: usize, seconds: f64) {
        if let Some(audio) = demo_audio_element(index) {
            audio.set_current_time(seconds.max(0.0));
        }
    }

    fn duration(&self, index: usize) -> f64 {
        demo_audio_element(index)
            .map(|audio| audio.duration())
            .unwrap_or(f64::NAN)
    }

    fn seekable_end(&self, index: usize) -> Option<f64> {
        let audio = demo_audio_element(index)?;
        let ranges = audio.seekable();
        let len = ranges.length();
        if len == 0 {
            return None;
        }
        ranges.end(len - 1).ok()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl MediaDeck for WebDeck {
    fn request_play(&mut self, _index: usize) {}

    fn pause(&mut self, _index: usize) {}

    fn set_position(&mut self, _index: usize, _seconds: f64) {}

    fn duration(&self, _index: usize) -> f64 {
        f64::NAN
    }

    fn seekable_end(&self, _index: usize) -> Option<f64> {
        None
    }
}

#[cfg(target_arch = "wasm32")]
fn dispatch(mut coordinator: Signal<Coordinator>, index: usize, event: MediaEvent) {
    let mut deck = WebDeck::new(coordinator);
    coordinator.write().handle_event(index, event, &mut deck);
}

/// Defer a coordinator write to the next tick. DOM callbacks may fire while
/// a signal write is still open further up the stack, so synchronous failure
/// paths must not write directly.
#[cfg(target_arch = "wasm32")]
fn deferred_dispatch(coordinator: Signal<Coordinator>, index: usize, event: MediaEvent) {
    spawn(async move {
        gloo_timers::future::TimeoutFuture::new(0).await;
        dispatch(coordinator, index, event);
    });
}

/// Wire the audio element behind `index` to the coordinator. Idempotent:
/// a marker attribute prevents double-attaching when the card re-renders.
///
/// Listening to the element's own `play` event (rather than trusting the
/// coordinator's call path alone) is what keeps the single-playback
/// invariant intact when playback starts elsewhere, e.g. via hardware media
/// keys.
#[cfg(target_arch = "wasm32")]
pub fn attach_media_listeners(index: usize, coordinator: Signal<Coordinator>) {
    let Some(audio) = demo_audio_element(index) else {
        return;
    };
    if audio.has_attribute(WIRED_MARKER) {
        return;
    }
    let _ = audio.set_attribute(WIRED_MARKER, "1");

    let runtime = Runtime::current();

    let simple = [
        ("play", MediaEvent::Started),
        ("pause", MediaEvent::Paused),
        ("ended", MediaEvent::Ended),
        ("canplay", MediaEvent::CanPlay),
        ("playing", MediaEvent::CanPlay),
        ("waiting", MediaEvent::Waiting),
    ];
    for (name, event) in simple {
        let runtime = runtime.clone();
        let callback = Closure::wrap(Box::new(move |_: Event| {
            let _guard = RuntimeGuard::new(runtime.clone());
            dispatch(coordinator, index, event);
        }) as Box<dyn FnMut(Event)>);
        let _ = audio.add_event_listener_with_callback(name, callback.as_ref().unchecked_ref());
        callback.forget();
    }

    for name in ["loadedmetadata", "durationchange"] {
        let runtime = runtime.clone();
        let element = audio.clone();
        let callback = Closure::wrap(Box::new(move |_: Event| {
            let _guard = RuntimeGuard::new(runtime.clone());
            let duration = element.duration();
            let event = if name == "loadedmetadata" {
                MediaEvent::MetadataLoaded { duration }
            } else {
                MediaEvent::DurationChanged { duration }
            };
            dispatch(coordinator, index, event);
        }) as Box<dyn FnMut(Event)>);
        let _ = audio.add_event_listener_with_callback(name, callback.as_ref().unchecked_ref());
        callback.forget();
    }

    {
        let runtime = runtime.clone();
        let element = audio.clone();
        let callback = Closure::wrap(Box::new(move |_: Event| {
            let _guard = RuntimeGuard::new(runtime.clone());
            let position = element.current_time();
            dispatch(coordinator, index, MediaEvent::TimeUpdate { position });
        }) as Box<dyn FnMut(Event)>);
        let _ =
            audio.add_event_listener_with_callback("timeupdate", callback.as_ref().unchecked_ref());
        callback.forget();
    }

    {
        let element = audio.clone();
        let callback = Closure::wrap(Box::new(move |_: Event| {
            let _guard = RuntimeGuard::new(runtime.clone());
            if media_error_code(&element).is_some() {
                dispatch(coordinator, index, MediaEvent::Failed);
            }
        }) as Box<dyn FnMut(Event)>);
        let _ = audio.add_event_listener_with_callback("error", callback.as_ref().unchecked_ref());
        callback.forget();
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn attach_media_listeners(_index: usize, _coordinator: Signal<Coordinator>) {}

/// Read `audio.error.code` without binding the MediaError interface.
#[cfg(target_arch = "wasm32")]
fn media_error_code(audio: &HtmlAudioElement) -> Option<u16> {
    let audio_js = wasm_bindgen::JsValue::from(audio.clone());
    let error_js = js_sys::Reflect::get(&audio_js, &"error".into()).ok()?;
    if error_js.is_null() || error_js.is_undefined() {
        return None;
    }
    js_sys::Reflect::get(&error_js, &"code".into())
        .ok()
        .and_then(|value| value.as_f64())
        .map(|code| code as u16)
}
