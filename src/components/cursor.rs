//! Custom cursor controller.
//!
//! Wires [`CursorState`] to the page: document pointer listeners write the
//! target, a `requestAnimationFrame` loop renders it, interactive elements
//! toggle the hover class, and a mutation observer rebinds hover listeners
//! for content added later. Never installed on touch or coarse-pointer
//! devices.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use gloo_render::{AnimationFrame, request_animation_frame};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, Element, HtmlElement, MouseEvent, MutationObserver, MutationObserverInit};

use crate::config::{classes, cursor as timing, ids, media, selectors};
use crate::core::{CursorState, DomError, HoverRegistry, Ripple};
use crate::models::Point;
use crate::utils::{Debouncer, dom, log};

type MutationCallback = Closure<dyn FnMut(js_sys::Array, MutationObserver)>;

/// Whether this device should get the custom cursor at all.
pub fn is_supported() -> bool {
    let coarse = dom::match_media(media::COARSE_POINTER).unwrap_or(false);
    !coarse && !dom::has_touch()
}

/// Install the custom cursor. No-op on touch/coarse devices or when the
/// document is not available.
pub fn install() -> Option<Rc<CursorController>> {
    if !is_supported() {
        return None;
    }
    match CursorController::start() {
        Ok(controller) => {
            log::debug("cursor: installed");
            Some(controller)
        }
        Err(e) => {
            log::debug(&format!("cursor: disabled ({e})"));
            None
        }
    }
}

/// Live cursor controller. Lives until the page unloads.
pub struct CursorController {
    document: Document,
    element: HtmlElement,
    state: RefCell<CursorState>,
    hover: RefCell<HoverRegistry<Element, Vec<EventListener>>>,
    frame: RefCell<Option<AnimationFrame>>,
    pointer_listeners: RefCell<Vec<EventListener>>,
    observer: RefCell<Option<(MutationObserver, MutationCallback)>>,
    rebind: RefCell<Option<Debouncer>>,
}

impl CursorController {
    /// Build the controller and start tracking, regardless of device type.
    pub fn start() -> Result<Rc<Self>, DomError> {
        let document = dom::document().ok_or(DomError::NoDocument)?;
        let body = document.body().ok_or(DomError::NoBody)?;
        let element = ensure_cursor_element(&document, &body)?;

        let (width, height) = dom::viewport_size().unwrap_or_default();
        let origin = Point::new(width / 2.0, height / 2.0);
        let state = CursorState::new(origin, dom::prefers_reduced_motion());

        let controller = Rc::new(Self {
            document,
            element,
            state: RefCell::new(state),
            hover: RefCell::new(HoverRegistry::new()),
            frame: RefCell::new(None),
            pointer_listeners: RefCell::new(Vec::new()),
            observer: RefCell::new(None),
            rebind: RefCell::new(None),
        });

        controller.listen_pointer();
        controller.bind_hover_targets();
        if let Err(e) = controller.observe_mutations(&body) {
            log::debug(&format!("cursor: no rebinding ({e})"));
        }
        controller.schedule_frame();
        controller.teardown_on_unload();

        Ok(controller)
    }

    // ------------------------------------------------------------------------
    // Pointer tracking
    // ------------------------------------------------------------------------

    fn listen_pointer(self: &Rc<Self>) {
        let passive = EventListenerOptions::default();
        let mut listeners = self.pointer_listeners.borrow_mut();

        let this = Rc::clone(self);
        listeners.push(EventListener::new_with_options(
            &self.document,
            "mousemove",
            passive,
            move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    this.state
                        .borrow_mut()
                        .set_target(f64::from(event.client_x()), f64::from(event.client_y()));
                }
            },
        ));

        let this = Rc::clone(self);
        listeners.push(EventListener::new_with_options(
            &self.document,
            "mousedown",
            passive,
            move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    this.on_press(event);
                }
            },
        ));

        let this = Rc::clone(self);
        listeners.push(EventListener::new_with_options(
            &self.document,
            "mouseup",
            passive,
            move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>()
                    && this.state.borrow_mut().release(event.button())
                {
                    dom::remove_class(&this.element, classes::CURSOR_DOWN);
                }
            },
        ));
    }

    fn on_press(&self, event: &MouseEvent) {
        let ripples = {
            let mut state = self.state.borrow_mut();
            if !state.press(event.button()) {
                return;
            }
            state.ripples_enabled()
        };
        dom::add_class(&self.element, classes::CURSOR_DOWN);
        if ripples {
            let origin = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
            if let Err(e) = spawn_ripple(&self.document, origin) {
                log::debug(&format!("cursor: ripple skipped ({e})"));
            }
        }
    }

    // ------------------------------------------------------------------------
    // Render loop
    // ------------------------------------------------------------------------

    fn schedule_frame(self: &Rc<Self>) {
        let this = Rc::clone(self);
        let handle = request_animation_frame(move |_timestamp| {
            this.frame.borrow_mut().take();
            this.render();
            this.schedule_frame();
        });
        self.frame.replace(Some(handle));
    }

    fn render(&self) {
        let transform = {
            let mut state = self.state.borrow_mut();
            state.step();
            state.transform()
        };
        let _ = self.element.style().set_property("transform", &transform);
    }

    // ------------------------------------------------------------------------
    // Hover binding
    // ------------------------------------------------------------------------

    /// Release listeners of detached elements, then attach hover listeners
    /// to interactive elements not bound yet.
    fn bind_hover_targets(self: &Rc<Self>) {
        let selector = selectors::INTERACTIVE.join(",");
        let mut hover = self.hover.borrow_mut();
        hover.prune(|element| element.is_connected());
        for element in dom::query_all(&selector) {
            hover.bind_with(&element, |element| self.bind_hover(element));
        }
        log::debug(&format!("cursor: {} hover targets", hover.len()));
    }

    /// Hover listeners for one element. Dropping them detaches them.
    fn bind_hover(self: &Rc<Self>, element: &Element) -> Vec<EventListener> {
        let passive = EventListenerOptions::default();
        let caret = dom::matches(element, selectors::TEXT_ENTRY);
        let mut listeners = Vec::with_capacity(if caret { 4 } else { 2 });

        let this = Rc::clone(self);
        listeners.push(EventListener::new_with_options(
            element,
            "mouseenter",
            passive,
            move |_| {
                dom::add_class(&this.element, classes::CURSOR_HOVER);
                if caret {
                    this.set_visible(false);
                }
            },
        ));

        let this = Rc::clone(self);
        listeners.push(EventListener::new_with_options(
            element,
            "mouseleave",
            passive,
            move |_| {
                dom::remove_class(&this.element, classes::CURSOR_HOVER);
                if caret {
                    this.set_visible(true);
                }
            },
        ));

        if caret {
            let this = Rc::clone(self);
            listeners.push(EventListener::new_with_options(
                element,
                "focus",
                passive,
                move |_| this.set_visible(false),
            ));

            let this = Rc::clone(self);
            listeners.push(EventListener::new_with_options(
                element,
                "blur",
                passive,
                move |_| this.set_visible(true),
            ));
        }
        listeners
    }

    /// Hide the custom cursor over text fields so the caret stays visible.
    fn set_visible(&self, visible: bool) {
        let style = self.element.style();
        let _ = if visible {
            style.remove_property("display").map(|_| ())
        } else {
            style.set_property("display", "none")
        };
    }

    fn observe_mutations(self: &Rc<Self>, body: &HtmlElement) -> Result<(), DomError> {
        let weak = Rc::downgrade(self);
        let debouncer = Debouncer::new(timing::REBIND_DEBOUNCE_MS, move || {
            if let Some(this) = weak.upgrade() {
                this.bind_hover_targets();
            }
        });

        let trigger = debouncer.clone();
        let callback: MutationCallback =
            Closure::new(move |_records: js_sys::Array, _observer: MutationObserver| {
                trigger.trigger();
            });
        let observer = MutationObserver::new(callback.as_ref().unchecked_ref())
            .map_err(|e| DomError::js("MutationObserver", &e))?;

        let init = MutationObserverInit::new();
        init.set_child_list(true);
        init.set_subtree(true);
        observer
            .observe_with_options(body, &init)
            .map_err(|e| DomError::js("observe", &e))?;

        self.observer.replace(Some((observer, callback)));
        self.rebind.replace(Some(debouncer));
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Teardown
    // ------------------------------------------------------------------------

    fn teardown_on_unload(self: &Rc<Self>) {
        let this = Rc::clone(self);
        let Some(window) = dom::window() else {
            return;
        };
        EventListener::once(&window, "beforeunload", move |_| this.teardown()).forget();
    }

    /// Stop the render loop, disconnect the observer, remove pointer and
    /// hover listeners.
    pub fn teardown(&self) {
        self.frame.borrow_mut().take();
        if let Some((observer, _callback)) = self.observer.borrow_mut().take() {
            observer.disconnect();
        }
        if let Some(rebind) = self.rebind.borrow_mut().take() {
            rebind.cancel();
        }
        self.pointer_listeners.borrow_mut().clear();
        self.hover.borrow_mut().clear();
    }
}

/// Reuse `#customCursor` or create it.
fn ensure_cursor_element(document: &Document, body: &HtmlElement) -> Result<HtmlElement, DomError> {
    if let Some(existing) = document
        .get_element_by_id(ids::CURSOR)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        return Ok(existing);
    }

    let element = document
        .create_element("div")
        .map_err(|e| DomError::js("create cursor", &e))?;
    element.set_id(ids::CURSOR);
    element.set_class_name(classes::CURSOR);
    let _ = element.set_attribute("aria-hidden", "true");
    body.append_child(&element)
        .map_err(|e| DomError::js("append cursor", &e))?;

    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::Js("cursor is not an HTML element".to_string()))
}

/// Append a ripple at `origin`, removed on `animationend` or after
/// [`timing::RIPPLE_TTL_MS`], whichever comes first.
fn spawn_ripple(document: &Document, origin: Point) -> Result<(), DomError> {
    let body = document.body().ok_or(DomError::NoBody)?;
    let element = document
        .create_element("div")
        .map_err(|e| DomError::js("create ripple", &e))?;
    element.set_class_name(classes::RIPPLE);

    let ripple = Rc::new(RefCell::new(Ripple::new(origin)));
    let [left, top] = ripple.borrow().position_styles();
    dom::set_styles(&element, [(left.0, left.1.as_str()), (top.0, top.1.as_str())]);
    body.append_child(&element)
        .map_err(|e| DomError::js("append ripple", &e))?;

    let on_end = {
        let ripple = Rc::clone(&ripple);
        let element = element.clone();
        move |_: &web_sys::Event| remove_ripple(&ripple, &element)
    };
    EventListener::once(&element, "animationend", on_end).forget();

    Timeout::new(timing::RIPPLE_TTL_MS, move || remove_ripple(&ripple, &element)).forget();
    Ok(())
}

fn remove_ripple(ripple: &RefCell<Ripple>, element: &Element) {
    if ripple.borrow_mut().take_removal() {
        element.remove();
    }
}
