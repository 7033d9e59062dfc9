//! DOM glue for the landing page.
//!
//! - [`cursor`] - Custom cursor with ripples and hover states
//! - [`mobile`] - Mobile style adapter and reduced-motion marker
//! - [`page`] - Downloads, gallery, scrolling, reveal, transitions

pub mod cursor;
pub mod mobile;
pub mod page;
