//! Filename resolution for downloaded release files.
//!
//! Three tiers, first hit wins:
//! 1. `Content-Disposition` (`filename*=UTF-8''…` before `filename=…`)
//! 2. the last non-empty path segment of the request URL
//! 3. [`DEFAULT_FILENAME`]

use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;

use crate::config::DEFAULT_FILENAME;

static EXTENDED_FILENAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"filename\*=UTF-8''([^;]+)").expect("valid regex"));

static QUOTED_FILENAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"filename="([^"]+)""#).expect("valid regex"));

static BARE_FILENAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"filename=([^";]+)"#).expect("valid regex"));

/// Resolve the name a downloaded file is saved under.
pub fn resolve_filename(content_disposition: Option<&str>, url: &str) -> String {
    content_disposition
        .and_then(filename_from_disposition)
        .or_else(|| filename_from_url(url))
        .unwrap_or_else(|| DEFAULT_FILENAME.to_string())
}

/// Extract and percent-decode the filename from a `Content-Disposition` value.
pub fn filename_from_disposition(header: &str) -> Option<String> {
    let raw = [&*EXTENDED_FILENAME, &*QUOTED_FILENAME, &*BARE_FILENAME]
        .into_iter()
        .find_map(|re| re.captures(header))
        .and_then(|caps| caps.get(1))?
        .as_str()
        .trim();

    let decoded = percent_decode_str(raw).decode_utf8().ok()?;
    let name = decoded.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Last non-empty path segment of an absolute URL.
pub fn filename_from_url(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    parsed
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .next_back()
        .map(str::to_string)
}
