//! Tool availability probing.
//!
//! The plan builder never looks at the host itself; it asks a [`ToolProbe`].
//! [`SystemProbe`] searches `PATH`, [`StaticProbe`] answers from a fixed set
//! (tests, `--tools` dry runs). A probe that cannot decide answers `false`.

use std::collections::{BTreeSet, HashMap};

/// Answers whether a named executable can be invoked on this host.
pub trait ToolProbe: Send + Sync {
    fn exists(&self, name: &str) -> bool;
}

impl<T: ToolProbe + ?Sized> ToolProbe for &T {
    fn exists(&self, name: &str) -> bool {
        (**self).exists(name)
    }
}

impl<T: ToolProbe + ?Sized> ToolProbe for Box<T> {
    fn exists(&self, name: &str) -> bool {
        (**self).exists(name)
    }
}

/// Looks tools up on `PATH`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProbe;

impl ToolProbe for SystemProbe {
    fn exists(&self, name: &str) -> bool {
        match which::which(name) {
            Ok(path) => {
                tracing::trace!(tool = name, path = %path.display(), "tool found");
                true
            }
            Err(err) => {
                tracing::trace!(tool = name, error = %err, "tool unavailable");
                false
            }
        }
    }
}

/// Reports exactly the tools it was built with.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StaticProbe {
    tools: BTreeSet<String>,
}

impl StaticProbe {
    pub fn new<I, S>(tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tools: tools.into_iter().map(Into::into).collect(),
        }
    }

    /// A host with no tools at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Parses a comma-separated list such as `curl,tar,rm`.
    pub fn from_list(list: &str) -> Self {
        Self::new(list.split(',').map(str::trim).filter(|s| !s.is_empty()))
    }
}

impl ToolProbe for StaticProbe {
    fn exists(&self, name: &str) -> bool {
        self.tools.contains(name)
    }
}

/// Per-invocation memo over a probe: each tool is asked about at most once.
pub struct ToolAvailability<'a> {
    probe: &'a dyn ToolProbe,
    seen: HashMap<&'static str, bool>,
}

impl<'a> ToolAvailability<'a> {
    pub fn new(probe: &'a dyn ToolProbe) -> Self {
        Self {
            probe,
            seen: HashMap::new(),
        }
    }

    pub fn has(&mut self, tool: &'static str) -> bool {
        let probe = self.probe;
        *self.seen.entry(tool).or_insert_with(|| probe.exists(tool))
    }

    /// First tool of `candidates` that is available.
    pub fn first_of(&mut self, candidates: &[&'static str]) -> Option<&'static str> {
        candidates.iter().copied().find(|tool| self.has(*tool))
    }
}
