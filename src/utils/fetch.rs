//! Blob fetching and browser-side saving.
//!
//! [`BrowserBackend`] is the [`DownloadBackend`] used on the page: it fetches
//! with the Fetch API (CORS, `no-cache`), saves through a temporary object
//! URL and a synthetic `<a download>` click, and falls back by setting
//! `location.href`.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, HtmlAnchorElement, Request, RequestCache, RequestInit, RequestMode, Response};

use crate::config::download::OBJECT_URL_TTL_MS;
use crate::core::{DownloadBackend, DownloadError, FetchedFile};
use crate::utils::dom;

/// Fetch a binary resource without HTTP caching.
///
/// Non-2xx responses are returned as [`DownloadError::Http`] without
/// reading the body.
pub async fn fetch_blob(url: &str) -> Result<FetchedFile<Blob>, DownloadError> {
    let window = dom::window().ok_or(DownloadError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    opts.set_cache(RequestCache::NoCache);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| DownloadError::RequestCreationFailed)?;

    let resp: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| DownloadError::Network(dom::describe_js(&e)))?
        .dyn_into()
        .map_err(|_| DownloadError::BodyReadFailed)?;

    if !resp.ok() {
        return Err(DownloadError::Http(resp.status()));
    }

    let content_disposition = resp.headers().get("content-disposition").ok().flatten();

    let blob = JsFuture::from(resp.blob().map_err(|_| DownloadError::BodyReadFailed)?)
        .await
        .map_err(|_| DownloadError::BodyReadFailed)?
        .dyn_into::<Blob>()
        .map_err(|_| DownloadError::BodyReadFailed)?;

    Ok(FetchedFile {
        payload: blob,
        content_disposition,
    })
}

/// Save `blob` as `filename` via a temporary object URL.
///
/// The object URL is revoked after [`OBJECT_URL_TTL_MS`], long enough for
/// the browser to start writing the file.
pub fn save_blob(blob: &Blob, filename: &str) -> Result<(), DownloadError> {
    let object_url = web_sys::Url::create_object_url_with_blob(blob)
        .map_err(|_| DownloadError::ObjectUrlFailed)?;

    let clicked = click_download_anchor(&object_url, filename);

    Timeout::new(OBJECT_URL_TTL_MS, move || {
        let _ = web_sys::Url::revoke_object_url(&object_url);
    })
    .forget();

    clicked
}

fn click_download_anchor(href: &str, filename: &str) -> Result<(), DownloadError> {
    let document = dom::document().ok_or(DownloadError::SaveFailed)?;
    let body = document.body().ok_or(DownloadError::SaveFailed)?;
    let anchor = document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok())
        .ok_or(DownloadError::SaveFailed)?;

    anchor.set_href(href);
    anchor.set_download(if filename.is_empty() { "download" } else { filename });
    body.append_child(&anchor)
        .map_err(|_| DownloadError::SaveFailed)?;
    anchor.click();
    anchor.remove();
    Ok(())
}

/// Fetch API + object URL implementation of [`DownloadBackend`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserBackend;

impl DownloadBackend for BrowserBackend {
    type Payload = Blob;

    async fn fetch(&self, url: &str) -> Result<FetchedFile<Blob>, DownloadError> {
        fetch_blob(url).await
    }

    fn save(&self, payload: Blob, filename: &str) -> Result<(), DownloadError> {
        save_blob(&payload, filename)
    }

    fn navigate(&self, url: &str) {
        dom::navigate(url);
    }
}
