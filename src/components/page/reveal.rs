//! Fade-in of page sections as they scroll into view.

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::{page, selectors};
use crate::core::{DomError, RevealState};
use crate::utils::{dom, log};

/// Hide every reveal target and show each one the first time at least
/// [`page::REVEAL_THRESHOLD`] of it is visible.
pub fn install() {
    if let Err(e) = try_install() {
        log::debug(&format!("reveal: disabled ({e})"));
    }
}

fn try_install() -> Result<(), DomError> {
    let targets = dom::query_all(selectors::REVEAL_TARGETS);
    if targets.is_empty() {
        return Ok(());
    }
    for target in &targets {
        dom::set_styles(target, page::REVEAL_HIDDEN.iter().copied());
    }

    let mut states: Vec<(Element, RevealState)> = targets
        .iter()
        .map(|el| (el.clone(), RevealState::default()))
        .collect();

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let element = entry.target();
                let Some((_, state)) = states.iter_mut().find(|(el, _)| *el == element) else {
                    continue;
                };
                if state.observe(entry.is_intersecting()) {
                    dom::set_styles(&element, page::REVEAL_VISIBLE.iter().copied());
                    observer.unobserve(&element);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&page::REVEAL_THRESHOLD.into());
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|e| DomError::js("IntersectionObserver", &e))?;
    for target in &targets {
        observer.observe(target);
    }
    // The observer lives for the rest of the page.
    callback.forget();
    Ok(())
}
