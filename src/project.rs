//! Project root resolution
//!
//! The project root is where config files live and where manifest paths are
//! resolved from. Starting at the working directory, each ancestor is tested in
//! turn:
//!
//! 1. it contains `pyproject.toml`, or
//! 2. it contains a `.fourmat` manifest, or
//! 3. it is the top level of the enclosing git working tree.
//!
//! The first match wins, so a nested Python project inside a larger repository
//! resolves to the nested project. If nothing matches all the way up to the
//! filesystem root, the starting directory itself is the root.

use std::cell::OnceCell;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::ports::VersionControl;
use crate::error::Result;
use crate::paths::ROOT_MARKERS;

/// Per-invocation project context
///
/// The root is computed on first access and cached for the lifetime of the
/// value; later calls return it unchanged even if the filesystem changes.
/// Build a fresh `Project` to resolve again.
pub struct Project {
    vcs: Box<dyn VersionControl>,
    root: OnceCell<PathBuf>,
}

impl Project {
    /// Create a project context using `vcs` for working tree detection
    pub fn new(vcs: impl VersionControl + 'static) -> Self {
        Self {
            vcs: Box::new(vcs),
            root: OnceCell::new(),
        }
    }

    /// The version control backend
    #[must_use]
    pub fn vcs(&self) -> &dyn VersionControl {
        self.vcs.as_ref()
    }

    /// Project root for the current working directory (memoized)
    pub fn root(&self) -> Result<&Path> {
        if let Some(root) = self.root.get() {
            return Ok(root);
        }
        let start = env::current_dir()?;
        self.root_from(&start)
    }

    /// Project root searched from `start` (memoized)
    ///
    /// Once a root is cached, `start` is ignored.
    pub fn root_from(&self, start: &Path) -> Result<&Path> {
        if let Some(root) = self.root.get() {
            return Ok(root);
        }
        let resolved = resolve_root(start, self.vcs())?;
        Ok(self.root.get_or_init(|| resolved))
    }
}

impl fmt::Debug for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Project").field("root", &self.root.get()).finish_non_exhaustive()
    }
}

/// Search for the project root starting at `start`, without caching.
///
/// The result is absolute and symlink-resolved. Only failing to resolve
/// `start` itself is an error.
pub fn resolve_root(start: &Path, vcs: &dyn VersionControl) -> Result<PathBuf> {
    let init_wd = start.canonicalize()?;
    let vcs_root = vcs.toplevel(&init_wd).and_then(|p| p.canonicalize().ok());
    log::debug!("resolving project root from {} (vcs root: {vcs_root:?})", init_wd.display());

    let mut cursor = init_wd.as_path();
    loop {
        if is_project_root(cursor, vcs_root.as_deref()) {
            log::debug!("project root: {}", cursor.display());
            return Ok(cursor.to_path_buf());
        }
        match cursor.parent() {
            Some(parent) => cursor = parent,
            None => break,
        }
    }

    log::debug!("no project root found, using {}", init_wd.display());
    Ok(init_wd)
}

/// Whether `dir` qualifies as a project root
///
/// Marker files are checked before the working tree top level.
fn is_project_root(dir: &Path, vcs_root: Option<&Path>) -> bool {
    ROOT_MARKERS.iter().any(|marker| dir.join(marker).is_file()) || vcs_root == Some(dir)
}
