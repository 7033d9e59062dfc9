//! Pointer geometry and click snapshots.

/// `MouseEvent.button` value of the primary (usually left) button.
pub const PRIMARY_BUTTON: i16 = 0;

/// `MouseEvent.button` value of the auxiliary (middle) button.
pub const MIDDLE_BUTTON: i16 = 1;

/// A position in CSS pixels relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Move `self` toward `target` by `factor` of the remaining distance.
    pub fn lerp_toward(self, target: Point, factor: f64) -> Point {
        Point {
            x: self.x + (target.x - self.x) * factor,
            y: self.y + (target.y - self.y) * factor,
        }
    }
}

/// Modifier keys and button of a click, detached from the DOM event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickModifiers {
    pub meta: bool,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub button: i16,
}

impl ClickModifiers {
    /// A plain primary click: no modifier held and not the middle button.
    ///
    /// Anything else (open in new tab, save link, ...) is left to the browser.
    pub fn is_plain(&self) -> bool {
        !(self.meta || self.ctrl || self.shift || self.alt || self.button == MIDDLE_BUTTON)
    }
}

impl From<&web_sys::MouseEvent> for ClickModifiers {
    fn from(event: &web_sys::MouseEvent) -> Self {
        Self {
            meta: event.meta_key(),
            ctrl: event.ctrl_key(),
            shift: event.shift_key(),
            alt: event.alt_key(),
            button: event.button(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_toward() {
        let from = Point::new(0.0, 100.0);
        let to = Point::new(100.0, 0.0);
        assert_eq!(from.lerp_toward(to, 0.5), Point::new(50.0, 50.0));
        assert_eq!(from.lerp_toward(to, 1.0), to);
        assert_eq!(from.lerp_toward(to, 0.0), from);
    }

    #[test]
    fn test_plain_click() {
        assert!(ClickModifiers::default().is_plain());
        assert!(
            !ClickModifiers {
                ctrl: true,
                ..Default::default()
            }
            .is_plain()
        );
        assert!(
            !ClickModifiers {
                meta: true,
                ..Default::default()
            }
            .is_plain()
        );
        assert!(
            !ClickModifiers {
                button: MIDDLE_BUTTON,
                ..Default::default()
            }
            .is_plain()
        );
    }
}
