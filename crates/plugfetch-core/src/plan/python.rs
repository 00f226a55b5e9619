//! `python3 -c` fallbacks for hosts missing unzip, tar, or a mover.
//!
//! Paths arrive through `sys.argv`; they are never spliced into the source.

/// `python3 -c ZIP_EXTRACT <archive> <dest>`
pub const ZIP_EXTRACT: &str = "\
import sys, zipfile
with zipfile.ZipFile(sys.argv[1]) as archive:
    archive.extractall(sys.argv[2])
";

/// `python3 -c TAR_EXTRACT <archive> <dest>`; compression is auto-detected.
pub const TAR_EXTRACT: &str = "\
import sys, tarfile
with tarfile.open(sys.argv[1], 'r:*') as archive:
    extra = {'filter': 'data'} if hasattr(tarfile, 'data_filter') else {}
    archive.extractall(sys.argv[2], **extra)
";

/// `python3 -c FLATTEN_MOVE <staging> <dest>`
///
/// A lone top-level directory is unwrapped so its children land in `dest`;
/// otherwise every top-level entry moves as is. Existing targets are replaced.
pub const FLATTEN_MOVE: &str = "\
import os, shutil, sys
src, dst = sys.argv[1], sys.argv[2]
entries = os.listdir(src)
if len(entries) == 1 and os.path.isdir(os.path.join(src, entries[0])):
    src = os.path.join(src, entries[0])
    entries = os.listdir(src)
os.makedirs(dst, exist_ok=True)
for name in entries:
    target = os.path.join(dst, name)
    if os.path.isdir(target) and not os.path.islink(target):
        shutil.rmtree(target)
    elif os.path.lexists(target):
        os.remove(target)
    shutil.move(os.path.join(src, name), target)
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripts_read_paths_from_argv() {
        for script in [ZIP_EXTRACT, TAR_EXTRACT, FLATTEN_MOVE] {
            assert!(script.contains("sys.argv[1]"));
            assert!(script.contains("sys.argv[2]"));
            assert!(!script.contains("sys.argv[3]"));
        }
    }

    #[test]
    fn scripts_are_not_indented_at_top_level() {
        for script in [ZIP_EXTRACT, TAR_EXTRACT, FLATTEN_MOVE] {
            assert!(script.starts_with("import "));
        }
    }
}
