//! Download buttons.
//!
//! Each platform button keeps a real `href` so modified clicks still work
//! as plain links; a plain click fetches the APK in the background and
//! hands it to the browser's save dialog, falling back to navigation.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, MouseEvent};

use crate::config::{self, download};
use crate::core::{ButtonState, ClickAction, DownloadOutcome, plan_click, run_download};
use crate::models::{ClickModifiers, Platform};
use crate::utils::{BrowserBackend, dom, log};

/// One download button and its state.
struct DownloadButton {
    platform: Platform,
    element: Element,
    state: RefCell<ButtonState>,
}

impl DownloadButton {
    fn label(&self) -> String {
        self.element.text_content().unwrap_or_default()
    }

    fn show(&self, label: &str) {
        self.element.set_text_content(Some(label));
    }

    fn set_disabled(&self, disabled: bool) {
        if disabled {
            dom::add_class(&self.element, download::DISABLED_CLASS);
        } else {
            dom::remove_class(&self.element, download::DISABLED_CLASS);
        }
    }

    fn restore(&self) {
        let label = self.state.borrow_mut().restore();
        if let Some(label) = label {
            self.show(&label);
        }
        self.set_disabled(false);
    }

    /// Put the original label back after `ms`, unless the button moved on.
    async fn end_flash_after(&self, generation: u32, ms: u32) {
        TimeoutFuture::new(ms).await;
        let label = self.state.borrow_mut().end_flash(generation);
        if let Some(label) = label {
            self.show(&label);
            self.set_disabled(false);
        }
    }
}

/// Wire every platform button present in the document.
pub fn install() {
    for platform in Platform::ALL {
        let Some(element) = dom::element_by_id(platform.button_id()) else {
            continue;
        };
        let url = config::download_url(platform);

        let _ = element.set_attribute("target", "_self");
        if let Some(url) = url {
            let _ = element.set_attribute("href", url);
        }

        let button = Rc::new(DownloadButton {
            platform,
            element: element.clone(),
            state: RefCell::new(ButtonState::new()),
        });
        EventListener::new_with_options(
            &element,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    on_click(&button, url, event);
                }
            },
        )
        .forget();
    }
}

fn on_click(button: &Rc<DownloadButton>, url: Option<&'static str>, event: &MouseEvent) {
    let action = plan_click(url, ClickModifiers::from(event), &button.state.borrow());
    match action {
        ClickAction::PassThrough => {}
        ClickAction::Ignore => event.prevent_default(),
        ClickAction::Unavailable => {
            event.prevent_default();
            flash_unavailable(button);
        }
        ClickAction::Start(url) => {
            event.prevent_default();
            start_download(button, url);
        }
    }
}

fn flash_unavailable(button: &Rc<DownloadButton>) {
    let label = button.label();
    let (shown, generation) = {
        let mut state = button.state.borrow_mut();
        (state.unavailable(&label), state.generation())
    };
    let Some(shown) = shown else {
        return;
    };
    log::warn(&format!("download: no link configured for {}", button.platform));
    button.show(shown);
    button.set_disabled(true);

    let button = Rc::clone(button);
    spawn_local(async move {
        button
            .end_flash_after(generation, download::UNAVAILABLE_FLASH_MS)
            .await;
    });
}

fn start_download(button: &Rc<DownloadButton>, url: &'static str) {
    let label = button.label();
    let shown = button.state.borrow_mut().begin(&label);
    let Some(shown) = shown else {
        return;
    };
    button.show(shown);
    button.set_disabled(true);

    let button = Rc::clone(button);
    spawn_local(async move {
        match run_download(&BrowserBackend, url).await {
            DownloadOutcome::Saved { filename } => {
                log::info(&format!("download: saved {filename}"));
                let (done, generation) = {
                    let mut state = button.state.borrow_mut();
                    (state.complete(), state.generation())
                };
                button.show(done);
                button
                    .end_flash_after(generation, download::DONE_FLASH_MS)
                    .await;
            }
            DownloadOutcome::FellBack { reason } => {
                log::warn(&format!("download: falling back to direct link ({reason})"));
                button.restore();
            }
        }
    });
}
