//! Mobile paint-cost reductions.
//!
//! [`MobileAdapterConfig`] describes which elements get which inline
//! overrides; [`apply_plan`] turns it into an ordered list of [`StyleOp`]s
//! that `components::mobile` executes against the document. Both former
//! adapter variants are presets of the same config.

use crate::config::classes::MOBILE_OPTIMIZED;
use crate::config::ids::{HERO_IMAGE, MODAL_IMAGE};
use crate::config::media::MOBILE;
use crate::config::selectors::{DECORATIONS, GALLERY_IMAGE, REVEAL_TARGETS};
use crate::config::viewport::{MOBILE_MAX_WIDTH, TOUCH_MAX_WIDTH};

/// Inline declarations replacing heavy shadows.
pub const FLAT_CARD: &[(&str, &str)] = &[
    ("box-shadow", "none"),
    ("border", "1px solid rgba(255,255,255,0.02)"),
];

/// Gallery images must not force reflows when they load.
pub const FLUID_IMAGE: &[(&str, &str)] = &[("max-width", "100%"), ("height", "auto")];

/// Compositor hint kept for the reveal fade-in.
pub const REVEAL_HINT: &[(&str, &str)] = &[("will-change", "opacity, transform")];

/// Shorter, cheaper lightbox image transition.
pub const QUICK_MODAL_IMAGE: &[(&str, &str)] = &[
    ("transition", "opacity 140ms linear"),
    ("cursor", "default"),
];

/// Decorative animations switched off entirely.
pub const NO_DECORATION: &[(&str, &str)] = &[
    ("animation", "none"),
    ("transition", "none"),
    ("display", "none"),
];

/// Which elements a [`StyleOp`] applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Id(&'static str),
    Selector(&'static str),
}

/// One document mutation of the mobile plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleOp {
    AddBodyClass(&'static str),
    RemoveBodyClass(&'static str),
    /// Set `loading="lazy"` unless the author already chose a value.
    LazyLoad(Target),
    SetStyles(Target, &'static [(&'static str, &'static str)]),
}

/// Configuration of the mobile adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MobileAdapterConfig {
    /// Media query that switches mobile mode on.
    pub query: &'static str,
    /// Elements whose shadows become subtle borders.
    pub shadow_targets: &'static str,
    /// Add `will-change` hints to reveal targets.
    pub hint_reveal_targets: bool,
    /// Hide decorative background animations (`.blob`).
    pub disable_decorations: bool,
}

impl MobileAdapterConfig {
    /// Full preset: every card type flattened, decorations removed.
    pub const fn full() -> Self {
        Self {
            query: MOBILE,
            shadow_targets: ".device-card, .section-inner, .card, .feature-card, .download-card, .about-card",
            hint_reveal_targets: true,
            disable_decorations: true,
        }
    }

    /// Compact preset: core cards only, decorations left running.
    pub const fn compact() -> Self {
        Self {
            query: MOBILE,
            shadow_targets: ".device-card, .section-inner, .card",
            hint_reveal_targets: true,
            disable_decorations: false,
        }
    }
}

impl Default for MobileAdapterConfig {
    fn default() -> Self {
        Self::full()
    }
}

/// Mutations applied when entering mobile mode, in order.
///
/// Every op is idempotent for classes and attributes; inline styles are
/// simply written again.
pub fn apply_plan(config: &MobileAdapterConfig) -> Vec<StyleOp> {
    let mut ops = vec![
        StyleOp::AddBodyClass(MOBILE_OPTIMIZED),
        StyleOp::LazyLoad(Target::Id(HERO_IMAGE)),
        StyleOp::LazyLoad(Target::Selector(GALLERY_IMAGE)),
        StyleOp::SetStyles(Target::Selector(GALLERY_IMAGE), FLUID_IMAGE),
    ];
    if config.hint_reveal_targets {
        ops.push(StyleOp::SetStyles(Target::Selector(REVEAL_TARGETS), REVEAL_HINT));
    }
    ops.push(StyleOp::SetStyles(Target::Id(MODAL_IMAGE), QUICK_MODAL_IMAGE));
    ops.push(StyleOp::SetStyles(
        Target::Selector(config.shadow_targets),
        FLAT_CARD,
    ));
    if config.disable_decorations {
        ops.push(StyleOp::SetStyles(Target::Selector(DECORATIONS), NO_DECORATION));
    }
    ops
}

/// Mutations applied when leaving mobile mode.
///
/// Only the marker class goes; inline overrides stay for the rest of the
/// session and desktop styling comes from the stylesheet again.
pub fn revert_plan() -> Vec<StyleOp> {
    vec![StyleOp::RemoveBodyClass(MOBILE_OPTIMIZED)]
}

/// Width-based stand-in for the media query when `matchMedia` is missing.
///
/// The first check also accepts touch devices up to a wider breakpoint;
/// later resize checks use the plain width threshold.
pub fn fallback_matches(width: f64, has_touch: bool, initial: bool) -> bool {
    width <= MOBILE_MAX_WIDTH || (initial && has_touch && width <= TOUCH_MAX_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_plan() {
        let ops = apply_plan(&MobileAdapterConfig::full());
        assert_eq!(ops.first(), Some(&StyleOp::AddBodyClass(MOBILE_OPTIMIZED)));
        assert!(ops.contains(&StyleOp::LazyLoad(Target::Id(HERO_IMAGE))));
        assert!(ops.contains(&StyleOp::SetStyles(
            Target::Selector(DECORATIONS),
            NO_DECORATION
        )));
        assert!(ops.contains(&StyleOp::SetStyles(
            Target::Selector(REVEAL_TARGETS),
            REVEAL_HINT
        )));
        assert!(ops.contains(&StyleOp::SetStyles(
            Target::Selector(".device-card, .section-inner, .card, .feature-card, .download-card, .about-card"),
            FLAT_CARD
        )));
    }

    #[test]
    fn test_compact_plan_keeps_decorations() {
        let ops = apply_plan(&MobileAdapterConfig::compact());
        assert!(!ops.iter().any(|op| matches!(
            op,
            StyleOp::SetStyles(Target::Selector(DECORATIONS), _)
        )));
        assert!(ops.contains(&StyleOp::SetStyles(
            Target::Selector(".device-card, .section-inner, .card"),
            FLAT_CARD
        )));
        assert!(ops.contains(&StyleOp::SetStyles(
            Target::Id(MODAL_IMAGE),
            QUICK_MODAL_IMAGE
        )));
    }

    #[test]
    fn test_revert_only_removes_marker() {
        assert_eq!(revert_plan(), vec![StyleOp::RemoveBodyClass(MOBILE_OPTIMIZED)]);
    }

    #[test]
    fn test_fallback_matches() {
        assert!(fallback_matches(640.0, false, false));
        assert!(!fallback_matches(641.0, false, false));
        assert!(fallback_matches(780.0, true, true));
        assert!(!fallback_matches(780.0, true, false));
        assert!(!fallback_matches(781.0, true, true));
        assert!(!fallback_matches(700.0, false, true));
    }
}
