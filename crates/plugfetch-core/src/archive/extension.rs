//! Archive extension table and name-stripping helpers.

use super::ArchiveKind;

/// Known archive suffixes, longest first so `.tar.gz` wins over `.gz`.
pub const ARCHIVE_EXTENSIONS: &[(&str, ArchiveKind)] = &[
    (".tar.bz2", ArchiveKind::Tar),
    (".tar.gz", ArchiveKind::Tar),
    (".tar.xz", ArchiveKind::Tar),
    (".tar", ArchiveKind::Tar),
    (".tgz", ArchiveKind::Tar),
    (".zip", ArchiveKind::Zip),
    (".bz2", ArchiveKind::None),
    (".gz", ArchiveKind::None),
];

/// Shortest and longest hex run accepted as a trailing commit/object hash.
const HEX_SUFFIX_MIN: usize = 7;
const HEX_SUFFIX_MAX: usize = 40;

/// ASCII case-insensitive `ends_with` that never splits a UTF-8 character.
fn ends_with_ignore_ascii_case(s: &str, suffix: &str) -> bool {
    if s.len() < suffix.len() {
        return false;
    }
    let start = s.len() - suffix.len();
    s.is_char_boundary(start) && s[start..].eq_ignore_ascii_case(suffix)
}

/// Returns the table entry whose suffix matches `path`, if any.
pub fn matching_extension(path: &str) -> Option<(&'static str, ArchiveKind)> {
    ARCHIVE_EXTENSIONS
        .iter()
        .copied()
        .find(|(ext, _)| ends_with_ignore_ascii_case(path, ext))
}

/// Strips a file extension from `name`.
///
/// Archive suffixes are removed as one unit (`foo.tar.gz` → `foo`); anything
/// else loses the text after the last dot. A leading dot is part of the name,
/// so `.vimrc` is returned unchanged.
pub fn strip_extension(name: &str) -> &str {
    if let Some((ext, _)) = matching_extension(name) {
        let stem = &name[..name.len() - ext.len()];
        if !stem.is_empty() {
            return stem;
        }
    }
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[..idx],
        _ => name,
    }
}

/// Strips a trailing `-<hex>` commit hash (7 to 40 hex digits).
///
/// `mylib-abcdef1234567` → `mylib`; `vim-peg` is left alone.
pub fn strip_hex_suffix(name: &str) -> &str {
    let Some(idx) = name.rfind('-') else {
        return name;
    };
    let tail = &name[idx + 1..];
    let is_hash = (HEX_SUFFIX_MIN..=HEX_SUFFIX_MAX).contains(&tail.len())
        && tail.bytes().all(|b| b.is_ascii_hexdigit());
    if is_hash && idx > 0 {
        &name[..idx]
    } else {
        name
    }
}
