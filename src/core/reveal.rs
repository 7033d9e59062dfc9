//! One-way section reveal.

/// Visibility of a section that fades in on first intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    /// Feed an intersection update. Returns `true` when the section should
    /// switch to its visible styles; scrolling away never hides it again.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if *self == Self::Hidden && is_intersecting {
            *self = Self::Visible;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_once() {
        let mut state = RevealState::default();
        assert!(!state.observe(false));
        assert_eq!(state, RevealState::Hidden);
        assert!(state.observe(true));
        assert!(!state.observe(true));
    }

    #[test]
    fn test_never_unreveals() {
        let mut state = RevealState::default();
        state.observe(true);
        assert!(!state.observe(false));
        assert_eq!(state, RevealState::Visible);
    }
}
