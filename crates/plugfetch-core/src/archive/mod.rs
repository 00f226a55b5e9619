//! Archive classification by URL path.
//!
//! Two questions are answered here: what kind of extractor a path needs
//! ([`kind_of`], by suffix only) and whether a URL should go through the
//! download-then-extract flow at all ([`looks_like_archive`], which also
//! honors structural markers such as `/archive/` or `/releases/download/`).

mod extension;

pub use extension::{matching_extension, strip_extension, strip_hex_suffix, ARCHIVE_EXTENSIONS};

use serde::Serialize;

/// Host serving single raw files; never treated as an archive by path markers.
pub const RAW_CONTENT_HOST: &str = "raw.githubusercontent.com";

/// Extractor family for a downloaded artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveKind {
    /// Not a multi-file archive (includes bare `.gz` / `.bz2` streams).
    None,
    Zip,
    Tar,
}

/// Classifies `path` by its (case-insensitive) suffix.
pub fn kind_of(path: &str) -> ArchiveKind {
    matching_extension(path)
        .map(|(_, kind)| kind)
        .unwrap_or(ArchiveKind::None)
}

/// Returns true if the URL path looks like something to extract.
///
/// Matches any archive suffix, or an `archive` / `get` segment, or both
/// `releases` and `download` segments. For [`RAW_CONTENT_HOST`] only the
/// suffix counts.
pub fn looks_like_archive(host: &str, path: &str) -> bool {
    if matching_extension(path).is_some() {
        return true;
    }
    if host.eq_ignore_ascii_case(RAW_CONTENT_HOST) {
        return false;
    }
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    has_segment(&segments, "archive")
        || has_segment(&segments, "get")
        || (has_segment(&segments, "releases") && has_segment(&segments, "download"))
}

pub(crate) fn has_segment(segments: &[&str], name: &str) -> bool {
    segments.iter().any(|s| *s == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_prefers_longest_suffix() {
        assert_eq!(kind_of("asset.tar.gz"), ArchiveKind::Tar);
        assert_eq!(kind_of("asset.tar.bz2"), ArchiveKind::Tar);
        assert_eq!(kind_of("asset.tar.xz"), ArchiveKind::Tar);
        assert_eq!(kind_of("asset.tgz"), ArchiveKind::Tar);
        assert_eq!(kind_of("asset.tar"), ArchiveKind::Tar);
    }

    #[test]
    fn kind_zip_is_case_insensitive() {
        assert_eq!(kind_of("/owner/repo/archive/main.zip"), ArchiveKind::Zip);
        assert_eq!(kind_of("/dl/PLUGIN.ZIP"), ArchiveKind::Zip);
    }

    #[test]
    fn single_stream_compression_is_not_an_archive_kind() {
        assert_eq!(kind_of("doc.txt.gz"), ArchiveKind::None);
        assert_eq!(kind_of("doc.bz2"), ArchiveKind::None);
        assert_eq!(kind_of("plugin.vim"), ArchiveKind::None);
        assert_eq!(kind_of(""), ArchiveKind::None);
    }

    #[test]
    fn structural_markers_flag_archives() {
        assert!(looks_like_archive("github.com", "/o/r/archive/refs/heads/main"));
        assert!(looks_like_archive("bitbucket.org", "/o/r/get/c6be9c909538"));
        assert!(looks_like_archive("github.com", "/o/r/releases/download/v1/asset"));
        assert!(!looks_like_archive("github.com", "/o/r/releases/latest"));
        assert!(!looks_like_archive("example.com", "/plugin.vim"));
        assert!(looks_like_archive("example.com", "/plugin.gz"));
    }

    #[test]
    fn raw_content_host_ignores_markers() {
        assert!(!looks_like_archive(RAW_CONTENT_HOST, "/o/r/main/archive/get.vim"));
        assert!(looks_like_archive(RAW_CONTENT_HOST, "/o/r/main/bundle.zip"));
    }
}
