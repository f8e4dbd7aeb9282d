//! Version control system port
//!
//! Defines the interface for interacting with version control.

use std::path::{Path, PathBuf};

/// Version control system abstraction
///
/// Implementations handle interactions with git or other VCS systems.
pub trait VersionControl {
    /// Top-level directory of the working tree containing `dir`.
    ///
    /// Any failure (no VCS installed, not inside a working tree, command error)
    /// is `None`, never an error.
    fn toplevel(&self, dir: &Path) -> Option<PathBuf>;

    /// Files under `paths` that were added, copied or modified relative to
    /// `HEAD`, as paths relative to the current directory.
    ///
    /// With `staged`, only changes already in the index are reported.
    fn changed_files(&self, paths: &[String], staged: bool) -> crate::Result<Vec<String>>;
}
