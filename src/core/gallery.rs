//! Screenshot lightbox logic.
//!
//! [`Lightbox`] drives any [`ModalDialog`]; in the browser that is the
//! Bootstrap modal wrapper in `components::page::gallery`.

/// Minimal modal dialog surface.
pub trait ModalDialog {
    fn show(&self);
    fn hide(&self);
}

/// Lightbox state: the image currently displayed, if any.
#[derive(Debug)]
pub struct Lightbox<M> {
    modal: M,
    current: Option<String>,
}

impl<M: ModalDialog> Lightbox<M> {
    pub fn new(modal: M) -> Self {
        Self {
            modal,
            current: None,
        }
    }

    #[cfg(test)]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Open the full-size image of a card: `set_src` receives the source
    /// before the modal is shown. Returns `false` if the card has no
    /// (non-empty) `data-full` value.
    pub fn open(&mut self, full: Option<String>, set_src: impl FnOnce(&str)) -> bool {
        let Some(full) = full.filter(|src| !src.trim().is_empty()) else {
            return false;
        };
        set_src(&full);
        self.current = Some(full);
        self.modal.show();
        true
    }

    /// Close on click of the enlarged image.
    pub fn dismiss(&self) {
        self.modal.hide();
    }

    /// Modal finished hiding. Returns the image source to set (empty) so a
    /// stale image never flashes on the next open.
    pub fn on_hidden(&mut self) -> &'static str {
        self.current = None;
        ""
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[derive(Default)]
    struct FakeModal {
        visible: Cell<bool>,
        shows: Cell<u32>,
    }

    impl ModalDialog for &FakeModal {
        fn show(&self) {
            self.visible.set(true);
            self.shows.set(self.shows.get() + 1);
        }

        fn hide(&self) {
            self.visible.set(false);
        }
    }

    #[test]
    fn test_open_and_close() {
        let modal = FakeModal::default();
        let mut lightbox = Lightbox::new(&modal);

        let mut src = String::new();
        assert!(lightbox.open(Some("/img/shot1.png".to_string()), |s| {
            src = s.to_string();
        }));
        assert_eq!(src, "/img/shot1.png");
        assert!(modal.visible.get());
        assert_eq!(lightbox.current(), Some("/img/shot1.png"));

        lightbox.dismiss();
        assert!(!modal.visible.get());
        assert_eq!(lightbox.on_hidden(), "");
        assert_eq!(lightbox.current(), None);
    }

    #[test]
    fn test_card_without_image_ignored() {
        let modal = FakeModal::default();
        let mut lightbox = Lightbox::new(&modal);
        assert!(!lightbox.open(None, |_| panic!("no source to set")));
        assert!(!lightbox.open(Some("  ".to_string()), |_| panic!("no source to set")));
        assert_eq!(modal.shows.get(), 0);
        assert!(!modal.visible.get());
    }

    #[test]
    fn test_source_set_before_show() {
        let modal = FakeModal::default();
        let mut lightbox = Lightbox::new(&modal);
        let mut shown_at_set = None;
        lightbox.open(Some("/img/shot2.png".to_string()), |_| {
            shown_at_set = Some(modal.shows.get());
        });
        assert_eq!(shown_at_set, Some(0));
        assert_eq!(modal.shows.get(), 1);
    }
}
