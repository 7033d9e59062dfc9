//! Link classification for smooth scrolling and page transitions.

use crate::config::page::HEADER_OFFSET_PX;

/// In-page anchor such as `#features`.
pub fn is_fragment_link(href: &str) -> bool {
    href.starts_with('#')
}

/// Same-site page link that gets the fade-out transition.
///
/// Works on the raw `href` attribute: fragments, absolute `http(s)` links,
/// `mailto:` and APK downloads keep their default behavior.
pub fn is_transition_link(href: &str) -> bool {
    !is_fragment_link(href)
        && !href.starts_with("http")
        && !href.starts_with("mailto:")
        && !href.ends_with(".apk")
}

/// Scroll position that leaves room for the fixed header above `offset_top`.
pub fn scroll_target_top(offset_top: f64) -> f64 {
    offset_top - HEADER_OFFSET_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_links() {
        assert!(is_transition_link("privacy.html"));
        assert!(is_transition_link("/terms"));
        assert!(is_transition_link("../index.html"));

        assert!(!is_transition_link("#features"));
        assert!(!is_transition_link("https://github.com/fahim-foysal-097/Spendle"));
        assert!(!is_transition_link("http://example.com"));
        assert!(!is_transition_link("mailto:hello@example.com"));
        assert!(!is_transition_link("files/spendle.apk"));
    }

    #[test]
    fn test_fragment_links() {
        assert!(is_fragment_link("#download"));
        assert!(!is_fragment_link("/#download"));
    }

    #[test]
    fn test_scroll_target_top() {
        assert_eq!(scroll_target_top(850.0), 800.0);
        assert_eq!(scroll_target_top(20.0), -30.0);
    }
}
