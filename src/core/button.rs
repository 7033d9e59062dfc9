//! Download button state machine.
//!
//! `Idle → Loading → {Done | Error} → Idle`. The label shown before the
//! first transition is saved so it can be restored when the button returns
//! to idle. A button is in flight from `Loading` until the attempt
//! resolves; clicks during that window are ignored.
//!
//! Flash timers capture the [`ButtonState::generation`] they were started
//! for, so a stale timer cannot reset a newer download.

use crate::config::download::{DONE_LABEL, LOADING_LABEL, UNAVAILABLE_LABEL};

/// Visible phase of a download button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonPhase {
    #[default]
    Idle,
    /// Fetch in progress
    Loading,
    /// Save triggered; showing the confirmation
    Done,
    /// No URL configured; showing the unavailable notice
    Error,
}

/// Per-button state: phase plus the label to restore.
#[derive(Debug, Clone, Default)]
pub struct ButtonState {
    phase: ButtonPhase,
    saved_label: Option<String>,
    generation: u32,
}

impl ButtonState {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn phase(&self) -> ButtonPhase {
        self.phase
    }

    /// Counter bumped whenever a download or an unavailable flash starts.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Whether a download attempt is running.
    pub fn is_in_flight(&self) -> bool {
        self.phase == ButtonPhase::Loading
    }

    /// Whether the button shows something other than its own label.
    pub fn is_busy(&self) -> bool {
        self.phase != ButtonPhase::Idle
    }

    /// Enter `Loading`. Returns the label to show, or `None` when a download
    /// is already running.
    pub fn begin(&mut self, current_label: &str) -> Option<&'static str> {
        if self.is_in_flight() {
            return None;
        }
        self.save_label(current_label);
        self.phase = ButtonPhase::Loading;
        self.generation = self.generation.wrapping_add(1);
        Some(LOADING_LABEL)
    }

    /// Enter `Done` after the save was triggered.
    pub fn complete(&mut self) -> &'static str {
        self.phase = ButtonPhase::Done;
        DONE_LABEL
    }

    /// Enter `Error` because no URL is configured. Returns `None` while a
    /// previous flash or download still owns the label.
    pub fn unavailable(&mut self, current_label: &str) -> Option<&'static str> {
        if self.is_busy() {
            return None;
        }
        self.save_label(current_label);
        self.phase = ButtonPhase::Error;
        self.generation = self.generation.wrapping_add(1);
        Some(UNAVAILABLE_LABEL)
    }

    /// Return to `Idle`, yielding the label to put back.
    pub fn restore(&mut self) -> Option<String> {
        self.phase = ButtonPhase::Idle;
        self.saved_label.take()
    }

    /// End a `Done`/`Error` flash started at `generation`.
    ///
    /// Returns `None` (and changes nothing) if the button moved on since.
    pub fn end_flash(&mut self, generation: u32) -> Option<String> {
        let flashing = matches!(self.phase, ButtonPhase::Done | ButtonPhase::Error);
        if !flashing || generation != self.generation {
            return None;
        }
        self.restore()
    }

    fn save_label(&mut self, current_label: &str) {
        // A label that is still one of ours belongs to an earlier state.
        if self.saved_label.is_none() {
            self.saved_label = Some(current_label.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_cycle() {
        let mut state = ButtonState::new();
        assert_eq!(state.begin("Download arm64"), Some(LOADING_LABEL));
        assert!(state.is_in_flight());
        assert_eq!(state.complete(), DONE_LABEL);
        assert_eq!(state.phase(), ButtonPhase::Done);
        assert!(!state.is_in_flight());
        assert_eq!(state.restore(), Some("Download arm64".to_string()));
        assert_eq!(state.phase(), ButtonPhase::Idle);
    }

    #[test]
    fn test_reentrant_click_ignored() {
        let mut state = ButtonState::new();
        assert!(state.begin("Get it").is_some());
        assert_eq!(state.begin(LOADING_LABEL), None);
        assert_eq!(state.restore(), Some("Get it".to_string()));
    }

    #[test]
    fn test_click_during_done_flash_keeps_original_label() {
        let mut state = ButtonState::new();
        state.begin("Get it");
        state.complete();
        // Clicked again while "Done ✓" is showing
        assert!(state.begin(DONE_LABEL).is_some());
        assert_eq!(state.restore(), Some("Get it".to_string()));
    }

    #[test]
    fn test_unavailable_flash() {
        let mut state = ButtonState::new();
        assert_eq!(state.unavailable("x86"), Some(UNAVAILABLE_LABEL));
        assert_eq!(state.phase(), ButtonPhase::Error);
        assert_eq!(state.unavailable(UNAVAILABLE_LABEL), None);
        assert_eq!(state.restore(), Some("x86".to_string()));
        assert!(!state.is_busy());
    }

    #[test]
    fn test_stale_flash_timer_ignored() {
        let mut state = ButtonState::new();
        state.begin("Get it");
        let first = state.generation();
        state.complete();
        // Second download starts before the first "Done" flash ends
        state.begin(DONE_LABEL);
        assert_eq!(state.end_flash(first), None);
        assert!(state.is_in_flight());

        state.complete();
        let second = state.generation();
        assert_eq!(state.end_flash(second), Some("Get it".to_string()));
        assert_eq!(state.end_flash(second), None);
    }

    #[test]
    fn test_restore_when_idle() {
        let mut state = ButtonState::new();
        assert_eq!(state.restore(), None);
    }
}
