//! File set loading and filtering
//!
//! When no files are given on the command line, the set comes from the
//! `.fourmat` manifest at the project root: whitespace-separated paths,
//! typically top-level package and test directories.

use std::fs;
use std::io;
use std::path::Path;

use glob::Pattern;

use crate::error::{Error, Result};
use crate::paths::{self, SNAPSHOT_GLOB};

/// Split manifest contents into paths
#[must_use]
pub fn parse_manifest(contents: &str) -> Vec<String> {
    contents.split_whitespace().map(String::from).collect()
}

/// Read the manifest at `root`
pub fn read_manifest(root: &Path) -> Result<Vec<String>> {
    let path = paths::manifest(root);
    match fs::read_to_string(&path) {
        Ok(contents) => Ok(parse_manifest(&contents)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::ManifestMissing { path }),
        Err(e) => Err(e.into()),
    }
}

/// Whether `file` is a generated snapshot test
#[must_use]
pub fn is_snapshot(file: &str) -> bool {
    Pattern::new(SNAPSHOT_GLOB).is_ok_and(|p| p.matches(file))
}

/// Keep Python sources, dropping generated snapshots
#[must_use]
pub fn python_sources(files: Vec<String>) -> Vec<String> {
    files
        .into_iter()
        .filter(|f| Path::new(f).extension().is_some_and(|ext| ext == "py"))
        .filter(|f| !is_snapshot(f))
        .collect()
}
