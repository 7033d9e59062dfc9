//! Data models shared by the page behaviors.
//!
//! - [`Platform`] - Release variants offered by the download buttons
//! - [`Point`] - Viewport coordinates used by the cursor
//! - [`ClickModifiers`] - Modifier/button snapshot of a click

mod platform;
mod pointer;

pub use platform::Platform;
pub use pointer::{ClickModifiers, Point, MIDDLE_BUTTON, PRIMARY_BUTTON};
