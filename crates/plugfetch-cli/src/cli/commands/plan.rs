//! `plugfetch plan <url>` – print the fetch/extract command plan.

use anyhow::{bail, Result};
use plugfetch_core::{CommandPlan, Protocol};
use std::path::PathBuf;

/// Flags for `plugfetch plan`.
#[derive(Debug, Default)]
pub struct PlanOptions {
    pub dest: Option<PathBuf>,
    pub base: Option<PathBuf>,
    pub tools: Option<String>,
    pub json: bool,
}

pub fn run_plan(url: &str, opts: PlanOptions) -> Result<()> {
    let protocol = super::protocol(opts.base, opts.tools.as_deref())?;
    let Some(detection) = protocol.detect(url) else {
        bail!("unsupported URL: {url}");
    };
    let dest = opts.dest.unwrap_or(detection.path);

    let plan = protocol.plan_sync(url, &dest);
    if plan.is_empty() {
        bail!("no usable tools to fetch {url} into {}", dest.display());
    }
    tracing::info!("planned {} command(s) for {}", plan.len(), url);

    println!("{}", render(&plan, opts.json)?);
    Ok(())
}

fn render(plan: &CommandPlan, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(plan)?);
    }
    Ok(plan
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}
