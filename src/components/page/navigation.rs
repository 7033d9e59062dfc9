//! In-page smooth scrolling and fade transitions between pages.

use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlAnchorElement, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config::{classes, page, selectors};
use crate::core::links::{is_fragment_link, is_transition_link, scroll_target_top};
use crate::utils::dom;

/// Scroll smoothly to the target of `#fragment` links, leaving room for the
/// fixed header. Links whose target does not exist keep their default.
pub fn install_smooth_scroll() {
    for anchor in dom::query_all(selectors::IN_PAGE_ANCHOR) {
        let link = anchor.clone();
        EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(href) = link.get_attribute("href").filter(|h| is_fragment_link(h)) else {
                    return;
                };
                let Some(target) = dom::query_one(&href)
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                else {
                    return;
                };
                event.prevent_default();
                scroll_to(scroll_target_top(f64::from(target.offset_top())));
            },
        )
        .forget();
    }
}

fn scroll_to(top: f64) {
    let Some(window) = dom::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Fade the body in now, and out before following same-site links.
///
/// Links are classified once, by their `href` attribute at install time.
pub fn install_transitions() {
    let Some(body) = dom::body() else {
        return;
    };
    dom::add_class(&body, classes::FADE_IN);

    for link in dom::query_all(selectors::LINK) {
        let Some(href) = link.get_attribute("href") else {
            continue;
        };
        if !is_transition_link(&href) {
            continue;
        }
        let anchor = link.clone();
        let body = body.clone();
        EventListener::new_with_options(
            &link,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                // Resolved against the document base, unlike the attribute.
                let url = anchor
                    .dyn_ref::<HtmlAnchorElement>()
                    .map(|a| a.href())
                    .unwrap_or_else(|| href.clone());

                dom::remove_class(&body, classes::FADE_IN);
                dom::add_class(&body, classes::FADE_OUT);
                spawn_local(async move {
                    TimeoutFuture::new(page::TRANSITION_DELAY_MS).await;
                    dom::navigate(&url);
                });
            },
        )
        .forget();
    }
}
