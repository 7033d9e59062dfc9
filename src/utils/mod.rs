//! Utility modules for DOM access, network fetching, and timers.
//!
//! Provides:
//! - [`dom`] - Safe lookups, media queries, lifecycle helpers
//! - [`fetch`] - Blob fetching and the browser [`BrowserBackend`]
//! - [`timer`] - [`Debouncer`] and its pure [`DebounceWindow`] rule
//! - [`log`] - Console logging

pub mod dom;
pub mod fetch;
pub mod log;
pub mod timer;

pub use fetch::BrowserBackend;
pub use timer::{DebounceWindow, Debouncer};
