//! Host plugin-manager integration surface.
//!
//! The host only needs [`Protocol`]: `detect` answers "do you handle this
//! source, and where does it live locally?", `plan_sync` returns the commands
//! that bring it there. Rejection is `None` / an empty plan, never an error.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use crate::config::Config;
use crate::plan::{self, CommandPlan};
use crate::probe::{SystemProbe, ToolProbe};
use crate::temp_path::{SystemTempPaths, TempPathProvider};
use crate::url_model::{self, CanonicalUrl};

/// Directory under the base path holding installed plugins.
pub const REPOS_DIR: &str = "repos";

/// Where an accepted source is installed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    /// `<base>/repos/<local name>`.
    pub path: PathBuf,
    /// Basename of the local name.
    pub name: String,
    pub url: CanonicalUrl,
}

pub trait Protocol {
    fn detect(&self, raw: &str) -> Option<Detection>;
    fn plan_sync(&self, raw: &str, destination: &Path) -> CommandPlan;
}

/// Protocol for plain http(s) archive and single-file sources.
pub struct HttpProtocol {
    base_path: PathBuf,
    probe: Box<dyn ToolProbe>,
    temp: Box<dyn TempPathProvider>,
}

impl HttpProtocol {
    pub fn new(
        base_path: impl Into<PathBuf>,
        probe: Box<dyn ToolProbe>,
        temp: Box<dyn TempPathProvider>,
    ) -> Self {
        Self {
            base_path: base_path.into(),
            probe,
            temp,
        }
    }

    /// Wires the system probe and temp paths from loaded configuration.
    pub fn from_config(cfg: &Config) -> Result<Self> {
        Ok(Self::new(
            cfg.resolved_base_path()?,
            Box::new(SystemProbe),
            Box::new(SystemTempPaths::new(cfg.temp_dir.clone())),
        ))
    }

    /// Replaces the tool probe (e.g. with a fixed tool list).
    pub fn with_probe(mut self, probe: Box<dyn ToolProbe>) -> Self {
        self.probe = probe;
        self
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl Protocol for HttpProtocol {
    fn detect(&self, raw: &str) -> Option<Detection> {
        let url = match url_model::normalize(raw) {
            Ok(url) => url,
            Err(reason) => {
                tracing::debug!(source = raw, %reason, "source not handled");
                return None;
            }
        };
        let local = url_model::local_name(&url);
        let name = url_model::basename(&local).to_string();
        let path = self.base_path.join(REPOS_DIR).join(&local);
        tracing::debug!(%url, path = %path.display(), "source detected");
        Some(Detection { path, name, url })
    }

    fn plan_sync(&self, raw: &str, destination: &Path) -> CommandPlan {
        match url_model::normalize(raw) {
            Ok(url) => plan::build_plan(&url, destination, &*self.probe, &*self.temp),
            Err(reason) => {
                tracing::debug!(source = raw, %reason, "no plan for unsupported source");
                CommandPlan::new()
            }
        }
    }
}
