//! Local directory name derivation.

use url::Url;

use super::normalize::{path_segments, CanonicalUrl};
use super::sanitize::sanitize_component;
use crate::archive::{has_segment, strip_extension, strip_hex_suffix, RAW_CONTENT_HOST};

/// Last-resort name when neither the path nor the host yields anything.
const DEFAULT_NAME: &str = "plugin";

/// Derives the local name for an accepted URL.
///
/// # Examples
///
/// - `https://github.com/Shougo/ddu.vim/archive/refs/heads/main.zip` → `github.com/Shougo/ddu.vim`
/// - `https://raw.githubusercontent.com/o/r/master/colors/candy.vim` → `candy`
/// - `https://example.com/downloads/mylib-abcdef1234567.zip` → `mylib`
pub fn local_name(url: &CanonicalUrl) -> String {
    name_for_url(url.as_url())
}

/// Derives a local name from any string, parsed as a URL when possible.
pub fn local_name_from_str(raw: &str) -> String {
    match Url::parse(raw.trim()) {
        Ok(url) if url.host_str().is_some() => name_for_url(&url),
        _ => name_from_plain_path(raw.trim()),
    }
}

fn name_for_url(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
    let segments = path_segments(url);

    let raw_name = match segments.as_slice() {
        [.., last] if host == RAW_CONTENT_HOST => strip_extension(last).to_string(),
        [owner, repo, ..] if has_download_marker(&segments) || is_forge(&host) => {
            let repo = repo.strip_suffix(".git").unwrap_or(*repo);
            format!("{host}/{owner}/{repo}")
        }
        [.., last] => strip_hex_suffix(strip_extension(last)).to_string(),
        [] => host.clone(),
    };

    finish(&raw_name, &host)
}

fn name_from_plain_path(raw: &str) -> String {
    let last = raw.split('/').filter(|s| !s.is_empty()).last().unwrap_or_default();
    let last = last.split(['?', '#']).next().unwrap_or_default();
    finish(strip_hex_suffix(strip_extension(last)), "")
}

fn has_download_marker(segments: &[&str]) -> bool {
    has_segment(segments, "archive")
        || has_segment(segments, "get")
        || (has_segment(segments, "releases") && has_segment(segments, "download"))
}

fn is_forge(host: &str) -> bool {
    matches!(host, "github.com" | "gitlab.com" | "bitbucket.org") || host.contains("git")
}

/// Sanitizes each component and guarantees a non-empty result.
fn finish(raw_name: &str, host: &str) -> String {
    let parts: Vec<String> = raw_name
        .split('/')
        .map(sanitize_component)
        .filter(|p| !p.is_empty())
        .collect();
    if !parts.is_empty() {
        return parts.join("/");
    }
    let host = sanitize_component(host);
    if host.is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        host
    }
}
