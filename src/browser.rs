//! `web-sys` implementations of the ports used by the state modules.

use std::{cell::Cell, rc::Rc, time::Duration};

use gloo_net::http::Request;
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions, Storage,
};

use crate::{
    config::EmailJsConfig,
    contact::{ContactError, ContactRequest, ContactTransport, EmailJsPayload},
    events::{EventHub, ViewportEvent},
    layout::{LayoutProbe, ScrollMetrics, SectionBounds},
    sections::Section,
    theme::{PreferenceStorage, ThemePreference},
};

const FALLBACK_VIEWPORT: (f64, f64) = (1280.0, 720.0);

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// `localStorage`; reads and writes silently no-op when storage is blocked.
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl PreferenceStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

fn media_matches(query: &str) -> Option<bool> {
    window()?
        .match_media(query)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
}

pub fn system_prefers_dark() -> Option<bool> {
    media_matches("(prefers-color-scheme: dark)")
}

fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)").unwrap_or(false)
}

pub fn apply_theme(theme: ThemePreference) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }

    if let Ok(Some(meta)) = document.query_selector("meta[name=\"theme-color\"]") {
        let _ = meta.set_attribute("content", theme.meta_color());
    }
}

pub fn apply_theme_with_transition(theme: ThemePreference) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    let callback = Closure::once_into_js(move || apply_theme(theme));
    if start_view_transition
        .call1(&document_js, callback.unchecked_ref())
        .is_err()
    {
        apply_theme(theme);
    }
}

pub fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return FALLBACK_VIEWPORT;
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT.1);

    (width, height)
}

pub fn smooth_scroll_to(top: f64) {
    let Some(win) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(if prefers_reduced_motion() {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    });
    win.scroll_to_with_scroll_to_options(&options);
}

pub fn random_unit() -> f64 {
    js_sys::Math::random()
}

pub fn local_timestamp() -> String {
    js_sys::Date::new_0()
        .to_locale_string("en-US", &JsValue::UNDEFINED)
        .into()
}

/// Live DOM measurements, looked up by section id on every call.
#[derive(Clone, Copy, Default)]
pub struct DomLayout;

impl LayoutProbe for DomLayout {
    fn scroll_metrics(&self) -> ScrollMetrics {
        let Some(win) = window() else {
            return ScrollMetrics::default();
        };

        let scroll_height = win
            .document()
            .and_then(|d| d.document_element())
            .map(|root| f64::from(root.scroll_height()))
            .unwrap_or(0.0);

        ScrollMetrics {
            scroll_top: win.scroll_y().unwrap_or(0.0),
            scroll_height,
            viewport_height: viewport_size().1,
        }
    }

    fn section_bounds(&self, section: Section) -> Option<SectionBounds> {
        let element = window()?
            .document()?
            .get_element_by_id(section.as_str())?
            .dyn_into::<HtmlElement>()
            .ok()?;

        Some(SectionBounds::new(
            f64::from(element.offset_top()),
            f64::from(element.offset_height()),
        ))
    }
}

/// Pending `setTimeout`; cleared when dropped.
pub struct Timeout {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new(after: Duration, callback: impl FnOnce() + 'static) -> Option<Self> {
        let mut callback = Some(callback);
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Some(callback) = callback.take() {
                callback();
            }
        });

        let millis = i32::try_from(after.as_millis()).unwrap_or(i32::MAX);
        let handle = window()?
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis,
            )
            .ok()?;

        Some(Self {
            handle,
            _callback: closure,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_timeout_with_handle(self.handle);
        }
    }
}

/// Repeating `setInterval` that stops once the callback returns `false`.
/// Cleared when dropped.
pub struct Interval {
    handle: Rc<Cell<Option<i32>>>,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(every: Duration, mut tick: impl FnMut() -> bool + 'static) -> Option<Self> {
        let handle = Rc::new(Cell::new(None::<i32>));
        let closure = {
            let handle = Rc::clone(&handle);
            Closure::<dyn FnMut()>::new(move || {
                if tick() {
                    return;
                }
                if let (Some(win), Some(id)) = (window(), handle.take()) {
                    win.clear_interval_with_handle(id);
                }
            })
        };

        let millis = i32::try_from(every.as_millis()).unwrap_or(i32::MAX);
        let id = window()?
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis,
            )
            .ok()?;
        handle.set(Some(id));

        Some(Self {
            handle,
            _callback: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let (Some(win), Some(id)) = (window(), self.handle.take()) {
            win.clear_interval_with_handle(id);
        }
    }
}

/// Forwards window `scroll` and `resize` into a hub. Listeners are removed
/// when this is dropped.
pub struct WindowEvents {
    hub: EventHub<ViewportEvent>,
    on_scroll: Closure<dyn FnMut()>,
    on_resize: Closure<dyn FnMut()>,
}

impl WindowEvents {
    pub fn install() -> Option<Self> {
        let win = window()?;
        let hub = EventHub::new();

        let on_scroll = {
            let hub = hub.clone();
            Closure::<dyn FnMut()>::new(move || hub.emit(&ViewportEvent::Scroll))
        };
        let on_resize = {
            let hub = hub.clone();
            Closure::<dyn FnMut()>::new(move || hub.emit(&ViewportEvent::Resize))
        };

        win.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
            .ok()?;
        if win
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .is_err()
        {
            let _ = win
                .remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
            return None;
        }

        Some(Self {
            hub,
            on_scroll,
            on_resize,
        })
    }

    pub fn hub(&self) -> &EventHub<ViewportEvent> {
        &self.hub
    }
}

impl Drop for WindowEvents {
    fn drop(&mut self) {
        if let Some(win) = window() {
            let _ = win.remove_event_listener_with_callback(
                "scroll",
                self.on_scroll.as_ref().unchecked_ref(),
            );
            let _ = win.remove_event_listener_with_callback(
                "resize",
                self.on_resize.as_ref().unchecked_ref(),
            );
        }
    }
}

/// One `IntersectionObserver` watching a single element; disconnected on
/// drop.
pub struct IntersectionWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array)>,
}

impl IntersectionWatch {
    pub fn observe(
        target: &Element,
        threshold: f64,
        on_report: impl Fn(bool, f64) + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Array)>::new(move |entries: Array| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_report(entry.is_intersecting(), entry.intersection_ratio());
                }
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
        observer.observe(target);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for IntersectionWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// EmailJS REST delivery. Without configuration every send fails with
/// [`ContactError::Unconfigured`].
#[derive(Clone)]
pub struct EmailJsTransport {
    config: Option<Rc<EmailJsConfig>>,
}

impl EmailJsTransport {
    pub fn new(config: Option<EmailJsConfig>) -> Self {
        Self {
            config: config.map(Rc::new),
        }
    }
}

impl ContactTransport for EmailJsTransport {
    async fn send(&self, request: &ContactRequest) -> Result<(), ContactError> {
        let Some(config) = self.config.as_deref() else {
            return Err(ContactError::Unconfigured);
        };

        let payload = EmailJsPayload::new(config, request);
        let response = Request::post(&config.endpoint)
            .json(&payload)
            .map_err(|error| ContactError::Transport(error.to_string()))?
            .send()
            .await
            .map_err(|error| ContactError::Transport(error.to_string()))?;

        if response.ok() {
            return Ok(());
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ContactError::Rejected { status, body })
    }
}
