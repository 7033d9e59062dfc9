//! Mobile style adapter.
//!
//! Executes the [`StyleOp`] plans from `core::mobile` whenever the mobile
//! media query flips, and mirrors `prefers-reduced-motion` onto the root
//! element. Falls back to width checks on resize where `matchMedia` is
//! missing.

use gloo_events::EventListener;
use leptos::prelude::*;
use leptos_use::use_media_query;
use web_sys::Element;

use crate::config::{classes, media};
use crate::core::mobile::{apply_plan, fallback_matches, revert_plan};
use crate::core::{MobileAdapterConfig, StyleOp, Target};
use crate::utils::{dom, log};

/// Install the adapter for the lifetime of the page.
///
/// Must run inside a reactive owner (the root component) so the effects
/// stay alive.
pub fn install(config: MobileAdapterConfig) {
    if dom::media_queries_supported() {
        let is_mobile = use_media_query(config.query.to_string());
        Effect::new(move |_| set_mobile(&config, is_mobile.get()));
    } else {
        install_resize_fallback(config);
    }
    track_reduced_motion();
}

/// Enter or leave mobile mode.
pub fn set_mobile(config: &MobileAdapterConfig, enabled: bool) {
    let plan = if enabled {
        apply_plan(config)
    } else {
        revert_plan()
    };
    plan.iter().for_each(run_op);
    log::debug(&format!("mobile: {}", if enabled { "on" } else { "off" }));
}

fn install_resize_fallback(config: MobileAdapterConfig) {
    let Some(window) = dom::window() else {
        return;
    };
    let check = move |initial: bool| {
        let (width, _) = dom::viewport_size().unwrap_or_default();
        set_mobile(&config, fallback_matches(width, dom::has_touch(), initial));
    };
    check(true);
    EventListener::new(&window, "resize", move |_| check(false)).forget();
}

fn track_reduced_motion() {
    let reduce = use_media_query(media::REDUCED_MOTION.to_string());
    Effect::new(move |_| {
        let Some(root) = dom::document().and_then(|d| d.document_element()) else {
            return;
        };
        if reduce.get() {
            dom::add_class(&root, classes::REDUCED_MOTION);
        } else {
            dom::remove_class(&root, classes::REDUCED_MOTION);
        }
    });
}

fn run_op(op: &StyleOp) {
    match *op {
        StyleOp::AddBodyClass(class) => {
            if let Some(body) = dom::body() {
                dom::add_class(&body, class);
            }
        }
        StyleOp::RemoveBodyClass(class) => {
            if let Some(body) = dom::body() {
                dom::remove_class(&body, class);
            }
        }
        StyleOp::LazyLoad(target) => {
            for element in resolve(target) {
                if !element.has_attribute("loading") {
                    let _ = element.set_attribute("loading", "lazy");
                }
            }
        }
        StyleOp::SetStyles(target, declarations) => {
            for element in resolve(target) {
                dom::set_styles(&element, declarations.iter().copied());
            }
        }
    }
}

fn resolve(target: Target) -> Vec<Element> {
    match target {
        Target::Id(id) => dom::element_by_id(id).into_iter().collect(),
        Target::Selector(selector) => dom::query_all(selector),
    }
}
