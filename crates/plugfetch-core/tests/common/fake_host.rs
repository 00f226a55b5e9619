//! Deterministic stand-ins for the host: a probe that records every lookup
//! and a temp provider with fixed, caller-chosen paths.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Mutex;

use plugfetch_core::probe::ToolProbe;
use plugfetch_core::temp_path::TempPathProvider;

/// Answers from a fixed tool set and logs the order of queries.
pub struct RecordingProbe {
    tools: BTreeSet<String>,
    pub queries: Mutex<Vec<String>>,
}

impl RecordingProbe {
    pub fn new(tools: &[&str]) -> Self {
        Self {
            tools: tools.iter().map(|s| s.to_string()).collect(),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queried(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

impl ToolProbe for RecordingProbe {
    fn exists(&self, name: &str) -> bool {
        self.queries.lock().unwrap().push(name.to_string());
        self.tools.contains(name)
    }
}

/// Always returns the same blob and staging paths.
pub struct FixedTemp {
    pub file: PathBuf,
    pub dir: PathBuf,
}

impl FixedTemp {
    pub fn new(file: impl Into<PathBuf>, dir: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            dir: dir.into(),
        }
    }
}

impl Default for FixedTemp {
    fn default() -> Self {
        Self::new("/tmp/pf-blob", "/tmp/pf-stage")
    }
}

impl TempPathProvider for FixedTemp {
    fn temp_file(&self) -> PathBuf {
        self.file.clone()
    }

    fn temp_dir(&self) -> PathBuf {
        self.dir.clone()
    }
}
