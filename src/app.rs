//! Root application module.
//!
//! The markup is served as static HTML, so [`App`] renders nothing: it owns
//! the reactive scope for the media-query effects and installs the DOM
//! behaviors once the document is ready.

use leptos::prelude::*;

use crate::components::{cursor, mobile, page};
use crate::core::MobileAdapterConfig;
use crate::utils::dom;

/// Main application component.
///
/// The mobile adapter is installed immediately so the first paint on small
/// screens already skips the heavy styles; everything else waits for
/// `DOMContentLoaded`.
#[component]
pub fn App() -> impl IntoView {
    mobile::install(MobileAdapterConfig::full());

    dom::on_ready(|| {
        cursor::install();
        page::install();
    });
}
