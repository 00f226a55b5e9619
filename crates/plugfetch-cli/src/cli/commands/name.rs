//! `plugfetch name <url>` – print the derived local name.

use anyhow::{Context, Result};
use plugfetch_core::url_model;

pub fn run_name(url: &str) -> Result<()> {
    let canonical = url_model::normalize(url).with_context(|| format!("unsupported URL: {url}"))?;
    println!("{}", url_model::local_name(&canonical));
    Ok(())
}
