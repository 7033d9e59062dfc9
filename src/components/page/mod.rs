//! Landing page behaviors installed once the document is ready.
//!
//! - [`download`] - Fetch-and-save download buttons
//! - [`gallery`] - Screenshot lightbox
//! - [`navigation`] - Smooth scrolling and page transitions
//! - [`reveal`] - Section fade-in on scroll

pub mod download;
pub mod gallery;
pub mod navigation;
pub mod reveal;

use crate::config::ids;
use crate::utils::{dom, log};

/// Install every page behavior. Missing markup disables only the behavior
/// that needs it.
///
/// Transitions go last: download buttons must already carry their absolute
/// release URLs so they are not mistaken for same-site links.
pub fn install() {
    set_current_year();
    download::install();
    gallery::install();
    navigation::install_smooth_scroll();
    reveal::install();
    navigation::install_transitions();
    log::debug("page: behaviors installed");
}

/// Fill `#curYear` with the current year.
pub fn set_current_year() {
    if let Some(el) = dom::element_by_id(ids::CURRENT_YEAR) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}
