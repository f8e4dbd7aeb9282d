//! Scoped working-directory changes
//!
//! [`PathContext`] changes the process working directory for as long as the
//! guard lives. The previous directory is restored in `Drop`, so it also comes
//! back on `?` early returns and while unwinding from a panic.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Guard holding the process inside a directory
///
/// The working directory is process-global: only one guard should be active
/// per thread of control, and guards must be dropped in reverse order of
/// creation.
#[derive(Debug)]
#[must_use = "the previous directory is restored as soon as the guard is dropped"]
pub struct PathContext {
    previous: PathBuf,
}

impl PathContext {
    /// Record the current directory, then change into `target`.
    ///
    /// `target` must exist. If the change fails the working directory is left
    /// untouched and the error is returned.
    pub fn enter(target: impl AsRef<Path>) -> Result<Self> {
        let previous = env::current_dir()?;
        env::set_current_dir(target.as_ref())?;
        log::debug!("entered {} (from {})", target.as_ref().display(), previous.display());
        Ok(Self { previous })
    }

    /// The directory that will be restored on drop
    #[must_use]
    pub fn previous(&self) -> &Path {
        &self.previous
    }
}

impl Drop for PathContext {
    fn drop(&mut self) {
        if let Err(err) = env::set_current_dir(&self.previous) {
            log::warn!("failed to restore working directory {}: {err}", self.previous.display());
        }
    }
}
