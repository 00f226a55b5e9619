//! `plugfetch detect <url>` – show the install location for a URL.

use anyhow::{bail, Result};
use plugfetch_core::Protocol;
use std::path::PathBuf;

pub fn run_detect(url: &str, base: Option<PathBuf>) -> Result<()> {
    let protocol = super::protocol(base, None)?;
    let Some(detection) = protocol.detect(url) else {
        bail!("unsupported URL: {url}");
    };
    println!("path: {}", detection.path.display());
    println!("name: {}", detection.name);
    println!("url:  {}", detection.url);
    Ok(())
}
