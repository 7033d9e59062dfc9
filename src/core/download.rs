//! Fetch-and-save download flow.
//!
//! The flow is written against [`DownloadBackend`] so it can run with the
//! browser fetch/anchor implementation (`utils::fetch::BrowserBackend`) or a
//! recording double in tests. Whatever happens, the user ends up with the
//! file: every failure falls back to navigating to the URL directly.

use crate::core::button::ButtonState;
use crate::core::error::DownloadError;
use crate::core::filename::resolve_filename;
use crate::models::ClickModifiers;

/// A successful response body plus the header needed to name it.
#[derive(Debug, Clone)]
pub struct FetchedFile<P> {
    pub payload: P,
    pub content_disposition: Option<String>,
}

/// Side effects of the download flow.
#[allow(async_fn_in_trait)]
pub trait DownloadBackend {
    /// Response body handle (a `Blob` in the browser).
    type Payload;

    /// GET `url` without HTTP caching. Non-2xx responses are
    /// [`DownloadError::Http`].
    async fn fetch(&self, url: &str) -> Result<FetchedFile<Self::Payload>, DownloadError>;

    /// Hand `payload` to the browser's save mechanism under `filename`.
    fn save(&self, payload: Self::Payload, filename: &str) -> Result<(), DownloadError>;

    /// Navigate the page to `url` (direct download fallback).
    fn navigate(&self, url: &str);
}

/// How a finished download attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// Save triggered under `filename`.
    Saved { filename: String },
    /// Fell back to direct navigation because of `reason`.
    FellBack { reason: DownloadError },
}

/// What a click on a download button should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Modified or middle click: let the browser handle the link.
    PassThrough,
    /// A download for this button is already running.
    Ignore,
    /// No URL configured for the platform.
    Unavailable,
    /// Start a download from this URL.
    Start(&'static str),
}

/// Decide how to handle a click on a download button whose configured
/// URL is `url`.
pub fn plan_click(
    url: Option<&'static str>,
    modifiers: ClickModifiers,
    state: &ButtonState,
) -> ClickAction {
    if !modifiers.is_plain() {
        return ClickAction::PassThrough;
    }
    let Some(url) = url else {
        return ClickAction::Unavailable;
    };
    if state.is_in_flight() {
        return ClickAction::Ignore;
    }
    ClickAction::Start(url)
}

/// Fetch `url`, name the payload and save it, falling back to navigation.
///
/// The fallback navigates exactly once per attempt.
pub async fn run_download<B: DownloadBackend>(backend: &B, url: &str) -> DownloadOutcome {
    match fetch_and_save(backend, url).await {
        Ok(filename) => DownloadOutcome::Saved { filename },
        Err(reason) => {
            backend.navigate(url);
            DownloadOutcome::FellBack { reason }
        }
    }
}

async fn fetch_and_save<B: DownloadBackend>(backend: &B, url: &str) -> Result<String, DownloadError> {
    let file = backend.fetch(url).await?;
    let filename = resolve_filename(file.content_disposition.as_deref(), url);
    backend.save(file.payload, &filename)?;
    Ok(filename)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::config;
    use crate::models::{MIDDLE_BUTTON, Platform};

    /// Backend double that records every side effect.
    struct RecordingBackend {
        response: Result<FetchedFile<Vec<u8>>, DownloadError>,
        save_result: Result<(), DownloadError>,
        fetched: RefCell<Vec<String>>,
        saved: RefCell<Vec<(Vec<u8>, String)>>,
        navigated: RefCell<Vec<String>>,
    }

    impl RecordingBackend {
        fn responding(response: Result<FetchedFile<Vec<u8>>, DownloadError>) -> Self {
            Self {
                response,
                save_result: Ok(()),
                fetched: RefCell::default(),
                saved: RefCell::default(),
                navigated: RefCell::default(),
            }
        }

        fn ok(disposition: Option<&str>) -> Self {
            Self::responding(Ok(FetchedFile {
                payload: b"PK\x03\x04".to_vec(),
                content_disposition: disposition.map(str::to_string),
            }))
        }
    }

    impl DownloadBackend for RecordingBackend {
        type Payload = Vec<u8>;

        async fn fetch(&self, url: &str) -> Result<FetchedFile<Vec<u8>>, DownloadError> {
            self.fetched.borrow_mut().push(url.to_string());
            self.response.clone()
        }

        fn save(&self, payload: Vec<u8>, filename: &str) -> Result<(), DownloadError> {
            self.save_result.clone()?;
            self.saved.borrow_mut().push((payload, filename.to_string()));
            Ok(())
        }

        fn navigate(&self, url: &str) {
            self.navigated.borrow_mut().push(url.to_string());
        }
    }

    #[tokio::test]
    async fn test_plain_click_fetches_once_per_platform() {
        for platform in Platform::ALL {
            let state = ButtonState::new();
            let configured = config::download_url(platform);
            let ClickAction::Start(url) = plan_click(configured, ClickModifiers::default(), &state)
            else {
                panic!("{platform} should start a download");
            };
            assert_eq!(Some(url), configured);

            let backend = RecordingBackend::ok(None);
            let outcome = run_download(&backend, url).await;

            assert_eq!(*backend.fetched.borrow(), vec![url.to_string()]);
            assert!(backend.navigated.borrow().is_empty());
            assert!(matches!(outcome, DownloadOutcome::Saved { .. }));
        }
    }

    #[tokio::test]
    async fn test_saves_under_disposition_name() {
        let url = config::download_url(Platform::X86).unwrap();
        let backend =
            RecordingBackend::ok(Some(r#"attachment; filename="spendle-v1.5.0-arm64-v8a.apk""#));

        let outcome = run_download(&backend, url).await;

        assert_eq!(
            outcome,
            DownloadOutcome::Saved {
                filename: "spendle-v1.5.0-arm64-v8a.apk".to_string()
            }
        );
        let saved = backend.saved.borrow();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].0, b"PK\x03\x04".to_vec());
    }

    #[tokio::test]
    async fn test_saves_under_url_name() {
        let url = config::download_url(Platform::X86).unwrap();
        let backend = RecordingBackend::ok(None);
        run_download(&backend, url).await;
        assert_eq!(backend.saved.borrow()[0].1, "spendle-v1.5.0-x86_64.apk");
    }

    #[tokio::test]
    async fn test_http_error_falls_back_once() {
        let url = config::download_url(Platform::Arm64).unwrap();
        let backend = RecordingBackend::responding(Err(DownloadError::Http(404)));

        let outcome = run_download(&backend, url).await;

        assert_eq!(
            outcome,
            DownloadOutcome::FellBack {
                reason: DownloadError::Http(404)
            }
        );
        assert_eq!(*backend.navigated.borrow(), vec![url.to_string()]);
        assert!(backend.saved.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_network_and_save_errors_fall_back() {
        let url = config::download_url(Platform::Armeabi).unwrap();

        let backend = RecordingBackend::responding(Err(DownloadError::Network("offline".into())));
        run_download(&backend, url).await;
        assert_eq!(backend.navigated.borrow().len(), 1);

        let mut backend = RecordingBackend::ok(None);
        backend.save_result = Err(DownloadError::ObjectUrlFailed);
        let outcome = run_download(&backend, url).await;
        assert_eq!(backend.fetched.borrow().len(), 1);
        assert_eq!(*backend.navigated.borrow(), vec![url.to_string()]);
        assert!(matches!(outcome, DownloadOutcome::FellBack { .. }));
    }

    #[test]
    fn test_modified_clicks_pass_through() {
        let state = ButtonState::new();
        let ctrl = ClickModifiers {
            ctrl: true,
            ..Default::default()
        };
        let middle = ClickModifiers {
            button: MIDDLE_BUTTON,
            ..Default::default()
        };
        let url = config::download_url(Platform::Arm64);
        assert_eq!(plan_click(url, ctrl, &state), ClickAction::PassThrough);
        assert_eq!(plan_click(url, middle, &state), ClickAction::PassThrough);
    }

    #[test]
    fn test_missing_url_is_unavailable() {
        let state = ButtonState::new();
        assert_eq!(
            plan_click(None, ClickModifiers::default(), &state),
            ClickAction::Unavailable
        );
    }

    #[test]
    fn test_click_while_in_flight_ignored() {
        let mut state = ButtonState::new();
        state.begin("Download");
        assert_eq!(
            plan_click(config::download_url(Platform::X86), ClickModifiers::default(), &state),
            ClickAction::Ignore
        );
    }
}
