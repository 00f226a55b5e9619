//! Unique temp path allocation for download blobs and extraction staging.
//!
//! Paths are only named here, never created; the executor creates them when
//! it runs the plan. Root lookup order: explicit root (config `temp_dir`),
//! `PLUGFETCH_TMPDIR`, [`std::env::temp_dir`] (honors `TMPDIR`), then `/tmp`.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

/// Environment override for the temp root.
pub const TMPDIR_ENV: &str = "PLUGFETCH_TMPDIR";

const PREFIX: &str = "plugfetch";

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Mints fresh temp paths; every call returns a path no earlier call returned.
pub trait TempPathProvider: Send + Sync {
    /// Path for the downloaded archive blob.
    fn temp_file(&self) -> PathBuf;
    /// Path for the extraction staging directory.
    fn temp_dir(&self) -> PathBuf;
}

/// Temp paths under a resolved system root.
#[derive(Debug, Clone)]
pub struct SystemTempPaths {
    root: PathBuf,
}

impl SystemTempPaths {
    /// Resolves the root, preferring `explicit_root` when given.
    pub fn new(explicit_root: Option<PathBuf>) -> Self {
        let root = explicit_root
            .filter(|p| !p.as_os_str().is_empty())
            .or_else(|| {
                std::env::var_os(TMPDIR_ENV)
                    .filter(|v| !v.is_empty())
                    .map(PathBuf::from)
            })
            .unwrap_or_else(default_root);
        tracing::debug!(root = %root.display(), "temp root resolved");
        Self { root }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    fn unique(&self, kind: &str) -> PathBuf {
        let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        let id = uuid::Uuid::new_v4().simple();
        self.root
            .join(format!("{PREFIX}-{kind}-{}-{seq}-{id}", std::process::id()))
    }
}

impl Default for SystemTempPaths {
    fn default() -> Self {
        Self::new(None)
    }
}

impl TempPathProvider for SystemTempPaths {
    fn temp_file(&self) -> PathBuf {
        self.unique("blob")
    }

    fn temp_dir(&self) -> PathBuf {
        self.unique("stage")
    }
}

fn default_root() -> PathBuf {
    let dir = std::env::temp_dir();
    if dir.as_os_str().is_empty() {
        PathBuf::from("/tmp")
    } else {
        dir
    }
}
