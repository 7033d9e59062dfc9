//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Lookups return
//! `Option`/empty collections instead of failing, so a page missing some
//! of the expected markup just loses the matching feature.

use gloo_events::EventListener;
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get `<body>`.
#[inline]
pub fn body() -> Option<HtmlElement> {
    document()?.body()
}

/// Get an element by ID.
pub fn element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Get an element by ID as an `HtmlElement` (or a subtype via `T`).
pub fn html_element_by_id<T: JsCast>(id: &str) -> Option<T> {
    element_by_id(id)?.dyn_into::<T>().ok()
}

/// All elements matching `selector`.
///
/// An invalid selector or a missing document yields an empty list.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// First element matching `selector`, treating invalid selectors as no match.
pub fn query_one(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// Whether `element` matches `selector` (invalid selectors never match).
pub fn matches(element: &Element, selector: &str) -> bool {
    element.matches(selector).unwrap_or(false)
}

/// Set inline style declarations on an element.
///
/// Elements that are not `HtmlElement`s (e.g. SVG children) are skipped.
pub fn set_styles<'a>(element: &Element, declarations: impl IntoIterator<Item = (&'a str, &'a str)>) {
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = element.style();
    for (property, value) in declarations {
        let _ = style.set_property(property, value);
    }
}

/// Add a class, ignoring failures.
pub fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

/// Remove a class, ignoring failures.
pub fn remove_class(element: &Element, class: &str) {
    let _ = element.class_list().remove_1(class);
}

// =============================================================================
// Media & Device Capabilities
// =============================================================================

/// Evaluate a media query.
///
/// Returns `None` when `matchMedia` is unavailable.
pub fn match_media(query: &str) -> Option<bool> {
    window()?
        .match_media(query)
        .ok()
        .flatten()
        .map(|list| list.matches())
}

/// Whether `window.matchMedia` exists.
pub fn media_queries_supported() -> bool {
    window().is_some_and(|w| {
        Reflect::get(&w, &"matchMedia".into()).is_ok_and(|f| f.is_function())
    })
}

/// Touch support: `ontouchstart` on window or a positive `maxTouchPoints`.
pub fn has_touch() -> bool {
    let Some(window) = window() else {
        return false;
    };
    let ontouchstart = Reflect::has(&window, &"ontouchstart".into()).unwrap_or(false);
    ontouchstart || window.navigator().max_touch_points() > 0
}

/// Whether the user asked the OS for reduced motion.
pub fn prefers_reduced_motion() -> bool {
    match_media(crate::config::media::REDUCED_MOTION).unwrap_or(false)
}

/// Viewport size in CSS pixels.
pub fn viewport_size() -> Option<(f64, f64)> {
    let window = window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

/// Monotonic milliseconds since page load (`performance.now()`), falling
/// back to the wall clock where the Performance API is missing.
pub fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

// =============================================================================
// Lifecycle & Navigation
// =============================================================================

/// Run `f` once the document is parsed.
///
/// Runs immediately unless `document.readyState` is still `"loading"`, in
/// which case it waits for `DOMContentLoaded`.
pub fn on_ready(f: impl FnOnce() + 'static) {
    let Some(document) = document() else {
        return;
    };
    let loading = Reflect::get(&document, &"readyState".into())
        .ok()
        .and_then(|state| state.as_string())
        .is_some_and(|state| state == "loading");

    if loading {
        EventListener::once(&document, "DOMContentLoaded", move |_| f()).forget();
    } else {
        f();
    }
}

/// Navigate the current tab to `url`.
pub fn navigate(url: &str) {
    if let Some(window) = window() {
        let _ = window.location().set_href(url);
    }
}

/// Describe a thrown JavaScript value for logs.
pub fn describe_js(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            Reflect::get(value, &"message".into())
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}
