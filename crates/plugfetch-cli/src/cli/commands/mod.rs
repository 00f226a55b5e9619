//! CLI command handlers. Each command is in its own file for clarity.

mod completions;
mod detect;
mod man;
mod name;
mod plan;

pub use completions::run_completions;
pub use detect::run_detect;
pub use man::run_man;
pub use name::run_name;
pub use plan::{run_plan, PlanOptions};

use anyhow::Result;
use plugfetch_core::config::{self, Config};
use plugfetch_core::probe::StaticProbe;
use plugfetch_core::HttpProtocol;
use std::path::PathBuf;

/// Loads config and builds the protocol, applying CLI overrides.
fn protocol(base: Option<PathBuf>, tools: Option<&str>) -> Result<HttpProtocol> {
    let mut cfg: Config = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    if base.is_some() {
        cfg.base_path = base;
    }
    let protocol = HttpProtocol::from_config(&cfg)?;
    Ok(match tools {
        Some(list) => protocol.with_probe(Box::new(StaticProbe::from_list(list))),
        None => protocol,
    })
}
