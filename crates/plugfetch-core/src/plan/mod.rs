//! Command plan synthesis.
//!
//! Builds the ordered command list that fetches an accepted URL into a
//! destination and, for archives, extracts and flattens it. Tool choice
//! follows fixed preference orders: native tools first, `python3` as the
//! universal fallback. A plan is either fully runnable with the probed tools
//! or empty; cleanup is the only step that may be silently dropped.

mod command;
mod python;

pub use command::{Command, CommandPlan};

use std::path::Path;

use crate::archive::{self, ArchiveKind};
use crate::probe::{ToolAvailability, ToolProbe};
use crate::temp_path::TempPathProvider;
use crate::url_model::CanonicalUrl;

const DOWNLOADERS: &[&str] = &["curl", "wget"];
/// Probed up front for archives, in this order.
const ARCHIVE_TOOLS: &[&str] = &["unzip", "tar", "python3", "rm", "cp", "rsync"];

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Builds the fetch (and extract) plan for `url` into `destination`.
///
/// Archives (see [`archive::looks_like_archive`]) are extracted into the
/// `destination` directory; anything else is written to `destination` as a
/// single file. Returns an empty plan when the available tools cannot
/// satisfy the request.
pub fn build_plan(
    url: &CanonicalUrl,
    destination: &Path,
    probe: &dyn ToolProbe,
    temp: &dyn TempPathProvider,
) -> CommandPlan {
    let mut tools = ToolAvailability::new(probe);
    let steps = if archive::looks_like_archive(url.host(), url.path()) {
        archive_steps(url, destination, &mut tools, temp)
    } else {
        single_file_steps(url, destination, &mut tools)
    };

    match steps {
        Some(commands) => {
            let mut plan = CommandPlan::new();
            for command in commands {
                tracing::debug!(%url, step = %command, "planned");
                plan.push(command);
            }
            plan
        }
        None => {
            tracing::warn!(%url, dest = %destination.display(), "no usable tool chain; plan is empty");
            CommandPlan::new()
        }
    }
}

fn download(tool: &str, url: &CanonicalUrl, target: &str) -> Command {
    match tool {
        "curl" => Command::new("curl", ["-L", "--fail", "-sSf", "-o", target, url.as_str()]),
        _ => Command::new("wget", ["-q", "-O", target, url.as_str()]),
    }
}

fn mkdir_p(dir: &Path) -> Command {
    Command::new("mkdir", ["-p".to_string(), path_arg(dir)])
}

fn single_file_steps(
    url: &CanonicalUrl,
    destination: &Path,
    tools: &mut ToolAvailability<'_>,
) -> Option<Vec<Command>> {
    let parent = match destination.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let downloader = tools.first_of(DOWNLOADERS)?;
    Some(vec![
        mkdir_p(parent),
        download(downloader, url, &path_arg(destination)),
    ])
}

fn archive_steps(
    url: &CanonicalUrl,
    destination: &Path,
    tools: &mut ToolAvailability<'_>,
    temp: &dyn TempPathProvider,
) -> Option<Vec<Command>> {
    let downloader = tools.first_of(DOWNLOADERS)?;
    for &tool in ARCHIVE_TOOLS {
        tools.has(tool);
    }

    let blob = path_arg(&temp.temp_file());
    let staging = path_arg(&temp.temp_dir());
    let dest = path_arg(destination);
    let (blob_arg, staging_arg, dest_arg) = (blob.as_str(), staging.as_str(), dest.as_str());

    let mut steps = vec![mkdir_p(destination), download(downloader, url, blob_arg)];

    let kind = archive::kind_of(url.path());
    let staged = match kind {
        ArchiveKind::Zip => {
            if tools.has("unzip") {
                steps.push(Command::new("unzip", ["-o", blob_arg, "-d", staging_arg]));
            } else if tools.has("python3") {
                steps.push(Command::new("python3", ["-c", python::ZIP_EXTRACT, blob_arg, staging_arg]));
            } else {
                return None;
            }
            true
        }
        // Archive-flagged paths without a known suffix get tar handling.
        ArchiveKind::Tar | ArchiveKind::None => {
            if tools.has("tar") {
                steps.push(Command::new(
                    "tar",
                    ["-xf", blob_arg, "-C", dest_arg, "--strip-components=1"],
                ));
                false
            } else if tools.has("python3") {
                steps.push(Command::new("python3", ["-c", python::TAR_EXTRACT, blob_arg, staging_arg]));
                true
            } else {
                return None;
            }
        }
    };

    if staged {
        steps.push(move_step(tools, staging_arg, dest_arg)?);
    }

    if tools.has("rm") {
        steps.push(Command::new("rm", ["-f", blob_arg]));
        if staged {
            steps.push(Command::new("rm", ["-rf", staging_arg]));
        }
    }

    Some(steps)
}

/// Relocates staged content into the destination; `None` when no mover exists.
fn move_step(tools: &mut ToolAvailability<'_>, staging: &str, dest: &str) -> Option<Command> {
    if tools.has("python3") {
        Some(Command::new("python3", ["-c", python::FLATTEN_MOVE, staging, dest]))
    } else if tools.has("cp") {
        Some(Command::new("cp", ["-a".to_string(), format!("{staging}/."), dest.to_string()]))
    } else if tools.has("rsync") {
        Some(Command::new("rsync", ["-a".to_string(), format!("{staging}/"), dest.to_string()]))
    } else {
        None
    }
}
