//! Screenshot lightbox on top of the page's Bootstrap modal.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlImageElement};

use crate::config::{ids, selectors};
use crate::core::{DomError, Lightbox, ModalDialog};
use crate::utils::{dom, log};

/// Bootstrap `Modal` instance driven through `window.bootstrap`.
pub struct BootstrapModal {
    instance: JsValue,
}

impl BootstrapModal {
    /// `bootstrap.Modal.getOrCreateInstance(element, { backdrop, keyboard })`.
    pub fn for_element(element: &Element) -> Result<Self, DomError> {
        let window = dom::window().ok_or(DomError::NoWindow)?;
        let bootstrap = Reflect::get(&window, &"bootstrap".into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .ok_or(DomError::MissingGlobal("bootstrap"))?;
        let modal = Reflect::get(&bootstrap, &"Modal".into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .ok_or(DomError::MissingGlobal("bootstrap.Modal"))?;
        let factory: Function = Reflect::get(&modal, &"getOrCreateInstance".into())
            .ok()
            .and_then(|f| f.dyn_into().ok())
            .ok_or(DomError::MissingGlobal("bootstrap.Modal.getOrCreateInstance"))?;

        let options = Object::new();
        let _ = Reflect::set(&options, &"backdrop".into(), &JsValue::TRUE);
        let _ = Reflect::set(&options, &"keyboard".into(), &JsValue::TRUE);

        let instance = factory
            .call2(&modal, element, &options)
            .map_err(|e| DomError::js("getOrCreateInstance", &e))?;
        Ok(Self { instance })
    }

    fn invoke(&self, method: &str) {
        let result = Reflect::get(&self.instance, &method.into())
            .and_then(|f| f.dyn_into::<Function>())
            .and_then(|f| f.call0(&self.instance));
        if let Err(e) = result {
            log::warn(&format!("gallery: modal.{method}() failed: {}", dom::describe_js(&e)));
        }
    }
}

impl ModalDialog for BootstrapModal {
    fn show(&self) {
        self.invoke("show");
    }

    fn hide(&self) {
        self.invoke("hide");
    }
}

/// Wire the gallery cards to the lightbox. Disabled, with a debug log, when
/// the modal markup or Bootstrap is missing.
pub fn install() {
    if let Err(e) = try_install() {
        log::debug(&format!("gallery: disabled ({e})"));
    }
}

fn try_install() -> Result<(), DomError> {
    let modal_el = dom::element_by_id(ids::SCREENSHOT_MODAL)
        .ok_or(DomError::MissingElement(ids::SCREENSHOT_MODAL))?;
    let image: HtmlImageElement = dom::html_element_by_id(ids::MODAL_IMAGE)
        .ok_or(DomError::MissingElement(ids::MODAL_IMAGE))?;

    let lightbox = Rc::new(RefCell::new(Lightbox::new(BootstrapModal::for_element(
        &modal_el,
    )?)));

    for card in dom::query_all(selectors::GALLERY_CARD) {
        let lightbox = Rc::clone(&lightbox);
        let image = image.clone();
        let target = card.clone();
        let options = EventListenerOptions::enable_prevent_default();
        EventListener::new_with_options(&card, "click", options, move |event| {
            event.prevent_default();
            let full = target.get_attribute("data-full");
            lightbox.borrow_mut().open(full, |src| image.set_src(src));
        })
        .forget();
    }

    {
        let lightbox = Rc::clone(&lightbox);
        EventListener::new(&image, "click", move |_| lightbox.borrow().dismiss()).forget();
    }

    // Without a fade transition Bootstrap fires `hidden` synchronously from
    // inside `hide()`, while the dismiss handler still holds the lightbox.
    EventListener::new(&modal_el, "hidden.bs.modal", move |_| {
        let lightbox = Rc::clone(&lightbox);
        let image = image.clone();
        spawn_local(async move {
            let src = lightbox.borrow_mut().on_hidden();
            image.set_src(src);
        });
    })
    .forget();

    Ok(())
}
