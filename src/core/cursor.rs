//! Custom cursor state.
//!
//! Everything here is plain data so the smoothing, press handling and
//! ripple bookkeeping can be exercised without a document. The DOM side
//! lives in `components::cursor`.

use crate::config::cursor::SMOOTHING;
use crate::models::{PRIMARY_BUTTON, Point};

// ============================================================================
// CursorState
// ============================================================================

/// Target and rendered position of the custom cursor plus its visual flags.
///
/// Pointer events only write the target (last write wins); the render loop
/// reads it once per frame, so intermediate moves are coalesced.
#[derive(Debug, Clone)]
pub struct CursorState {
    target: Point,
    rendered: Point,
    smoothing: f64,
    reduced_motion: bool,
    pressed: bool,
}

impl CursorState {
    /// Start with both positions at `origin` (usually the viewport center).
    ///
    /// Reduced motion disables smoothing and ripples.
    pub fn new(origin: Point, reduced_motion: bool) -> Self {
        Self {
            target: origin,
            rendered: origin,
            smoothing: if reduced_motion { 1.0 } else { SMOOTHING },
            reduced_motion,
            pressed: false,
        }
    }

    #[cfg(test)]
    pub fn target(&self) -> Point {
        self.target
    }

    #[cfg(test)]
    pub fn rendered(&self) -> Point {
        self.rendered
    }

    #[cfg(test)]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Whether a press should spawn a ripple.
    pub fn ripples_enabled(&self) -> bool {
        !self.reduced_motion
    }

    /// Record the latest pointer position.
    pub fn set_target(&mut self, x: f64, y: f64) {
        self.target = Point::new(x, y);
    }

    /// Advance one animation frame and return the new rendered position.
    pub fn step(&mut self) -> Point {
        self.rendered = if self.smoothing >= 1.0 {
            self.target
        } else {
            self.rendered.lerp_toward(self.target, self.smoothing)
        };
        self.rendered
    }

    /// CSS transform placing the cursor's center on the rendered position.
    pub fn transform(&self) -> String {
        cursor_transform(self.rendered)
    }

    /// Handle a button press. Returns `true` if the cursor entered the
    /// pressed state (primary button only).
    pub fn press(&mut self, button: i16) -> bool {
        if button != PRIMARY_BUTTON {
            return false;
        }
        self.pressed = true;
        true
    }

    /// Handle a button release. Returns `true` if the pressed state cleared.
    pub fn release(&mut self, button: i16) -> bool {
        if button != PRIMARY_BUTTON {
            return false;
        }
        self.pressed = false;
        true
    }
}

/// `translate3d` keeps updates on the compositor.
pub fn cursor_transform(p: Point) -> String {
    format!("translate3d({}px, {}px, 0) translate(-50%, -50%)", p.x, p.y)
}

// ============================================================================
// Ripple
// ============================================================================

/// Removal bookkeeping for one ripple element.
///
/// Both the `animationend` handler and the safety timeout call
/// [`Ripple::take_removal`]; only the first caller gets `true`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    origin: Point,
    removed: bool,
}

impl Ripple {
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            removed: false,
        }
    }

    /// Inline `left`/`top` for the ripple element.
    pub fn position_styles(&self) -> [(&'static str, String); 2] {
        [
            ("left", format!("{}px", self.origin.x)),
            ("top", format!("{}px", self.origin.y)),
        ]
    }

    /// Claim the removal. Returns `true` exactly once.
    pub fn take_removal(&mut self) -> bool {
        !std::mem::replace(&mut self.removed, true)
    }

    #[cfg(test)]
    pub fn is_removed(&self) -> bool {
        self.removed
    }
}

// ============================================================================
// HoverRegistry
// ============================================================================

/// Elements that already carry hover listeners, with whatever keeps those
/// listeners alive.
///
/// Generic over the element handle so it can be tested with plain values;
/// in the browser `K` is `web_sys::Element`, whose equality is identity, and
/// `L` owns the element's `EventListener`s. Pruning an entry drops its
/// listeners, so detached nodes are released.
#[derive(Debug, Clone)]
pub struct HoverRegistry<K, L = ()> {
    bound: Vec<(K, L)>,
}

impl<K: PartialEq, L> HoverRegistry<K, L> {
    pub fn new() -> Self {
        Self { bound: Vec::new() }
    }

    /// Bind `key` with `bind` unless it is already bound. Returns `true` if
    /// `bind` ran.
    pub fn bind_with(&mut self, key: &K, bind: impl FnOnce(&K) -> L) -> bool
    where
        K: Clone,
    {
        if self.is_bound(key) {
            return false;
        }
        let handle = bind(key);
        self.bound.push((key.clone(), handle));
        true
    }

    pub fn is_bound(&self, key: &K) -> bool {
        self.bound.iter().any(|(k, _)| k == key)
    }

    /// Forget every entry whose key is no longer live. Returns how many
    /// entries were dropped.
    pub fn prune(&mut self, is_live: impl Fn(&K) -> bool) -> usize {
        let before = self.bound.len();
        self.bound.retain(|(k, _)| is_live(k));
        before - self.bound.len()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.bound.clear();
    }

    pub fn len(&self) -> usize {
        self.bound.len()
    }
}

impl<K: PartialEq, L> Default for HoverRegistry<K, L> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MIDDLE_BUTTON;

    #[test]
    fn test_smoothing_moves_toward_target() {
        let mut state = CursorState::new(Point::new(0.0, 0.0), false);
        state.set_target(100.0, 200.0);
        let p = state.step();
        assert!((p.x - 96.0).abs() < 1e-9);
        assert!((p.y - 192.0).abs() < 1e-9);

        // Converges without overshooting
        for _ in 0..20 {
            state.step();
        }
        let p = state.rendered();
        assert!(p.x <= 100.0 && (100.0 - p.x) < 1e-6);
        assert!(p.y <= 200.0 && (200.0 - p.y) < 1e-6);
    }

    #[test]
    fn test_reduced_motion_snaps_every_frame() {
        let mut state = CursorState::new(Point::new(10.0, 10.0), true);
        for (x, y) in [(50.0, 60.0), (3.5, 900.0), (0.0, 0.0)] {
            state.set_target(x, y);
            assert_eq!(state.step(), Point::new(x, y));
            assert_eq!(state.rendered(), state.target());
        }
        assert!(!state.ripples_enabled());
    }

    #[test]
    fn test_moves_between_frames_coalesce() {
        let mut state = CursorState::new(Point::default(), true);
        state.set_target(1.0, 1.0);
        state.set_target(2.0, 2.0);
        state.set_target(3.0, 4.0);
        assert_eq!(state.step(), Point::new(3.0, 4.0));
    }

    #[test]
    fn test_transform() {
        assert_eq!(
            cursor_transform(Point::new(12.5, 40.0)),
            "translate3d(12.5px, 40px, 0) translate(-50%, -50%)"
        );
    }

    #[test]
    fn test_press_ignores_non_primary() {
        let mut state = CursorState::new(Point::default(), false);
        assert!(!state.press(MIDDLE_BUTTON));
        assert!(!state.is_pressed());
        assert!(state.press(PRIMARY_BUTTON));
        assert!(state.is_pressed());
        assert!(!state.release(2));
        assert!(state.is_pressed());
        assert!(state.release(PRIMARY_BUTTON));
        assert!(!state.is_pressed());
    }

    #[test]
    fn test_ripple_removed_once() {
        let mut ripple = Ripple::new(Point::new(5.0, 6.0));
        assert!(!ripple.is_removed());
        // animationend and the safety timeout race; only one wins
        assert!(ripple.take_removal());
        assert!(!ripple.take_removal());
        assert!(ripple.is_removed());
    }

    #[test]
    fn test_ripple_position() {
        let ripple = Ripple::new(Point::new(5.0, 6.5));
        let [(left, x), (top, y)] = ripple.position_styles();
        assert_eq!((left, x.as_str()), ("left", "5px"));
        assert_eq!((top, y.as_str()), ("top", "6.5px"));
    }

    #[test]
    fn test_hover_registry_binds_once() {
        let mut registry = HoverRegistry::new();
        let mut binds = 0;
        assert!(registry.bind_with(&"a#home", |_| binds += 1));
        assert!(registry.bind_with(&"button.cta", |_| binds += 1));
        assert!(!registry.bind_with(&"a#home", |_| binds += 1));
        assert_eq!(binds, 2);
        assert_eq!(registry.len(), 2);
        assert!(registry.is_bound(&"button.cta"));
    }

    #[test]
    fn test_hover_registry_stays_bounded_under_churn() {
        // Each pass replaces the previous batch of nodes with fresh ones.
        let mut registry: HoverRegistry<u32, Vec<u32>> = HoverRegistry::new();
        for pass in 0..50u32 {
            let live = pass * 200..(pass + 1) * 200;
            registry.prune(|id| live.contains(id));
            for id in live.clone() {
                registry.bind_with(&id, |id| vec![*id]);
            }
        }
        assert_eq!(registry.len(), 200);
        assert!(registry.is_bound(&9_999));
        assert!(!registry.is_bound(&0));
    }

    #[test]
    fn test_hover_registry_prune_and_clear() {
        let mut registry: HoverRegistry<&str> = HoverRegistry::default();
        registry.bind_with(&"kept", |_| ());
        registry.bind_with(&"detached", |_| ());
        assert_eq!(registry.prune(|key| *key == "kept"), 1);
        assert!(!registry.is_bound(&"detached"));
        // A re-attached node binds again.
        assert!(registry.bind_with(&"detached", |_| ()));
        registry.clear();
        assert_eq!(registry.len(), 0);
    }
}
