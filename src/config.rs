//! Application configuration.
//!
//! Centralizes the constants shared by the page behaviors: release links,
//! element IDs and class names the markup provides, selector lists, and
//! the timings that must line up with the stylesheet.

use crate::models::Platform;

// =============================================================================
// Release Downloads
// =============================================================================

/// Direct APK links per CPU architecture (v1.5.0).
pub const DOWNLOAD_LINKS: &[(Platform, &str)] = &[
    (
        Platform::Arm64,
        "https://github.com/fahim-foysal-097/Spendle/releases/download/v1.5.0/spendle-v1.5.0-arm64-v8a.apk",
    ),
    (
        Platform::Armeabi,
        "https://github.com/fahim-foysal-097/Spendle/releases/download/v1.5.0/spendle-v1.5.0-armeabi-v7a.apk",
    ),
    (
        Platform::X86,
        "https://github.com/fahim-foysal-097/Spendle/releases/download/v1.5.0/spendle-v1.5.0-x86_64.apk",
    ),
];

/// Look up the configured release URL for a platform.
pub fn download_url(platform: Platform) -> Option<&'static str> {
    DOWNLOAD_LINKS
        .iter()
        .find(|(p, _)| *p == platform)
        .map(|(_, url)| *url)
}

/// Filename used when neither the response nor the URL yields one.
pub const DEFAULT_FILENAME: &str = "spendle.apk";

/// Download button timings and labels.
pub mod download {
    /// How long the "unavailable" label stays up (ms).
    pub const UNAVAILABLE_FLASH_MS: u32 = 2_500;
    /// How long the "done" label stays up before restoring (ms).
    pub const DONE_FLASH_MS: u32 = 1_400;
    /// Lifetime of a blob object URL after the save was triggered (ms).
    pub const OBJECT_URL_TTL_MS: u32 = 30_000;

    pub const LOADING_LABEL: &str = "Downloading…";
    pub const DONE_LABEL: &str = "Done ✓";
    pub const UNAVAILABLE_LABEL: &str = "Not available";

    /// Class applied while a button is not idle.
    pub const DISABLED_CLASS: &str = "disabled";
}

// =============================================================================
// DOM Contract
// =============================================================================

/// Element IDs supplied by the page markup.
pub mod ids {
    pub const CURSOR: &str = "customCursor";
    pub const SCREENSHOT_MODAL: &str = "screenshotModal";
    pub const MODAL_IMAGE: &str = "modalImage";
    pub const HERO_IMAGE: &str = "heroImage";
    pub const CURRENT_YEAR: &str = "curYear";
}

/// Class names toggled or created by the behaviors.
pub mod classes {
    pub const CURSOR: &str = "custom-cursor";
    pub const CURSOR_DOWN: &str = "cursor--down";
    pub const CURSOR_HOVER: &str = "cursor--hover";
    pub const RIPPLE: &str = "cursor-ripple";
    pub const MOBILE_OPTIMIZED: &str = "mobile-optimized";
    pub const REDUCED_MOTION: &str = "reduced-motion";
    pub const FADE_IN: &str = "fade-in";
    pub const FADE_OUT: &str = "fade-out";
}

/// Selector lists queried by the behaviors.
pub mod selectors {
    /// Elements that put the custom cursor into its hover state.
    pub const INTERACTIVE: &[&str] = &[
        "a[href]",
        "button",
        ".btn",
        "input",
        "textarea",
        "select",
        "[role=\"button\"]",
        ".gallery-card",
        ".nav-link",
        ".btn-download",
    ];

    /// Elements with a text caret; the custom cursor hides over them.
    pub const TEXT_ENTRY: &str = "input, textarea, [contenteditable]";

    pub const GALLERY_CARD: &str = ".gallery-card";
    pub const GALLERY_IMAGE: &str = ".gallery-card img";
    pub const IN_PAGE_ANCHOR: &str = "a[href^=\"#\"]";
    pub const LINK: &str = "a[href]";
    pub const REVEAL_TARGETS: &str = "section, .hero, .container";
    pub const DECORATIONS: &str = ".blob, .blob *";
}

/// Media queries.
pub mod media {
    pub const COARSE_POINTER: &str = "(pointer: coarse)";
    pub const REDUCED_MOTION: &str = "(prefers-reduced-motion: reduce)";
    pub const MOBILE: &str = "(max-width: 640px), (pointer: coarse)";
}

// =============================================================================
// Cursor
// =============================================================================

/// Cursor smoothing and ripple timings.
pub mod cursor {
    /// Fraction of the remaining distance covered per frame.
    pub const SMOOTHING: f64 = 0.96;
    /// Safety removal for ripples whose `animationend` never fires (ms).
    pub const RIPPLE_TTL_MS: u32 = 900;
    /// Quiet period after DOM mutations before hover listeners rebind (ms).
    pub const REBIND_DEBOUNCE_MS: u32 = 120;
}

// =============================================================================
// Page Behaviors
// =============================================================================

/// Scroll, reveal and transition parameters.
pub mod page {
    /// Clearance left above a smooth-scroll target for the fixed header (px).
    pub const HEADER_OFFSET_PX: f64 = 50.0;
    /// Fraction of a section that must be visible before it reveals.
    pub const REVEAL_THRESHOLD: f64 = 0.15;
    /// Must match the `.fade-out` transition in the stylesheet (ms).
    pub const TRANSITION_DELAY_MS: u32 = 400;

    pub const REVEAL_HIDDEN: &[(&str, &str)] = &[
        ("opacity", "0"),
        ("transform", "translateY(25px)"),
        ("transition", "opacity 0.6s ease, transform 0.6s ease"),
    ];
    pub const REVEAL_VISIBLE: &[(&str, &str)] = &[("opacity", "1"), ("transform", "translateY(0)")];
}

// =============================================================================
// Mobile
// =============================================================================

/// Viewport thresholds used when `matchMedia` is unavailable.
pub mod viewport {
    /// Widest viewport treated as mobile (px).
    pub const MOBILE_MAX_WIDTH: f64 = 640.0;
    /// Widest touch-capable viewport treated as mobile on first load (px).
    pub const TOUCH_MAX_WIDTH: f64 = 780.0;
}
