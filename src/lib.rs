//! Client-side behavior for the Spendle landing page, compiled to
//! WebAssembly.
//!
//! - [`core`] - Document-free state and decisions
//! - [`components`] - DOM glue built on `core`
//! - [`utils`] - Browser helpers (DOM access, fetch, timers, logging)

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

use leptos::prelude::*;

/// Mount the render-less root onto `<body>` and keep it alive.
pub fn start() {
    let Some(body) = utils::dom::body() else {
        utils::log::warn("spendle: no <body>, nothing to enhance");
        return;
    };
    mount_to(body, app::App).forget();
}
