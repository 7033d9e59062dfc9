//! Debounced callbacks.
//!
//! [`DebounceWindow`] is the timing rule: an action is due once `delay` has
//! passed since the last trigger. [`Debouncer`] applies it in the browser
//! with at most one pending `setTimeout`; triggers inside the window only
//! move the deadline, and a timer that wakes early re-arms for the rest.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;

use crate::utils::dom;

/// Pure debounce rule over caller-supplied timestamps (ms).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebounceWindow {
    delay_ms: f64,
    last_trigger_ms: Option<f64>,
}

impl DebounceWindow {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms: f64::from(delay_ms),
            last_trigger_ms: None,
        }
    }

    /// Record a trigger at `now_ms`, restarting the quiet period.
    pub fn trigger(&mut self, now_ms: f64) {
        self.last_trigger_ms = Some(now_ms);
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.last_trigger_ms.is_some()
    }

    /// Whether the quiet period since the last trigger has elapsed.
    pub fn is_due(&self, now_ms: f64) -> bool {
        self.last_trigger_ms
            .is_some_and(|last| now_ms - last >= self.delay_ms)
    }

    /// Time left until due, if a trigger is pending.
    pub fn remaining_ms(&self, now_ms: f64) -> Option<f64> {
        self.last_trigger_ms
            .map(|last| (last + self.delay_ms - now_ms).max(0.0))
    }

    /// Consume a due trigger. Returns `true` at most once per quiet period.
    pub fn take_due(&mut self, now_ms: f64) -> bool {
        if self.is_due(now_ms) {
            self.last_trigger_ms = None;
            return true;
        }
        false
    }

    pub fn cancel(&mut self) {
        self.last_trigger_ms = None;
    }
}

struct DebouncerInner {
    window: RefCell<DebounceWindow>,
    timer: RefCell<Option<Timeout>>,
    action: Box<dyn Fn()>,
}

/// Browser debouncer running `action` once per burst of triggers.
#[derive(Clone)]
pub struct Debouncer {
    inner: Rc<DebouncerInner>,
}

impl Debouncer {
    pub fn new(delay_ms: u32, action: impl Fn() + 'static) -> Self {
        Self {
            inner: Rc::new(DebouncerInner {
                window: RefCell::new(DebounceWindow::new(delay_ms)),
                timer: RefCell::new(None),
                action: Box::new(action),
            }),
        }
    }

    /// Restart the quiet period; arms the timer if none is pending.
    pub fn trigger(&self) {
        let now = dom::now_ms();
        let delay = {
            let mut window = self.inner.window.borrow_mut();
            window.trigger(now);
            window.remaining_ms(now).unwrap_or_default()
        };
        if self.inner.timer.borrow().is_none() {
            arm(&self.inner, delay);
        }
    }

    /// Drop any pending run.
    pub fn cancel(&self) {
        self.inner.window.borrow_mut().cancel();
        self.inner.timer.borrow_mut().take();
    }
}

fn arm(inner: &Rc<DebouncerInner>, delay_ms: f64) {
    let weak: Weak<DebouncerInner> = Rc::downgrade(inner);
    let timeout = Timeout::new(delay_ms.ceil() as u32, move || {
        if let Some(inner) = weak.upgrade() {
            fire(&inner);
        }
    });
    inner.timer.replace(Some(timeout));
}

fn fire(inner: &Rc<DebouncerInner>) {
    let now = dom::now_ms();
    let (due, remaining) = {
        let mut window = inner.window.borrow_mut();
        (window.take_due(now), window.remaining_ms(now))
    };
    inner.timer.borrow_mut().take();

    if due {
        (inner.action)();
    } else if let Some(remaining) = remaining {
        arm(inner, remaining);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_after_quiet_period() {
        let mut window = DebounceWindow::new(120);
        assert!(!window.is_due(1_000.0));

        window.trigger(0.0);
        assert!(window.is_pending());
        assert!(!window.is_due(119.0));
        assert!(window.is_due(120.0));
    }

    #[test]
    fn test_rapid_triggers_reschedule() {
        let mut window = DebounceWindow::new(120);
        // Mutations at 0, 50 and 100 ms: nothing fires until 220 ms
        for t in [0.0, 50.0, 100.0] {
            window.trigger(t);
        }
        assert!(!window.take_due(150.0));
        assert_eq!(window.remaining_ms(150.0), Some(70.0));
        assert!(!window.take_due(219.0));
        assert!(window.take_due(220.0));
        assert!(!window.take_due(400.0));
        assert_eq!(window.remaining_ms(400.0), None);
    }

    #[test]
    fn test_remaining_never_negative() {
        let mut window = DebounceWindow::new(120);
        window.trigger(0.0);
        assert_eq!(window.remaining_ms(0.0), Some(120.0));
        assert_eq!(window.remaining_ms(500.0), Some(0.0));
    }

    #[test]
    fn test_cancel() {
        let mut window = DebounceWindow::new(120);
        window.trigger(0.0);
        window.cancel();
        assert!(!window.is_pending());
        assert!(!window.is_due(500.0));
    }
}
