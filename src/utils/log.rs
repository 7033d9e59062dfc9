//! Console logging.
//!
//! Thin wrappers over `web_sys::console` so call sites stay one line.

#[inline]
pub fn debug(message: &str) {
    web_sys::console::debug_1(&message.into());
}

#[inline]
pub fn info(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[inline]
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}
