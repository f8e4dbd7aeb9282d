//! Git integration
//!
//! Provides the git-native queries fourmat needs:
//! - Working tree top level (project root detection)
//! - Changed files against `HEAD` (`--changed` / `--staged`)

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::core::ports::VersionControl;
use crate::error::{Error, Result};

/// [`VersionControl`] backed by the `git` executable
#[derive(Debug, Clone, Copy, Default)]
pub struct GitCli;

impl VersionControl for GitCli {
    fn toplevel(&self, dir: &Path) -> Option<PathBuf> {
        get_toplevel_in(dir)
    }

    fn changed_files(&self, paths: &[String], staged: bool) -> Result<Vec<String>> {
        get_changed_files(paths, staged)
    }
}

/// Get the top level of the working tree containing `dir`
pub fn get_toplevel_in(dir: &Path) -> Option<PathBuf> {
    Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .current_dir(dir)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

/// Get files added, copied or modified against `HEAD` under `paths`
pub fn get_changed_files(paths: &[String], staged: bool) -> Result<Vec<String>> {
    let mut command = Command::new("git");
    command.args(["diff-index", "--name-only", "--relative", "--diff-filter", "ACM"]);
    if staged {
        command.arg("--cached");
    }
    command.args(["HEAD", "--"]).args(paths);

    let output = command.output().map_err(|e| Error::Vcs(e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::Vcs(format!("diff-index failed: {}", stderr.trim())));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.lines().map(String::from).filter(|s| !s.is_empty()).collect())
}
