//! Error types for fourmat
//!
//! A tool exiting non-zero is not an error: it is reported through
//! [`ToolOutcome`](crate::core::models::ToolOutcome). The variants here cover
//! everything that stops a run from producing outcomes at all.

use std::io;
use std::path::PathBuf;

/// Errors raised while resolving or running a lint pipeline
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An underlying I/O error
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// No explicit files were given and the project has no manifest
    #[error("no files given and no manifest found at {}", path.display())]
    ManifestMissing {
        /// Where the manifest was expected
        path: PathBuf,
    },

    /// A tool could not be started (usually: not installed or not on `PATH`)
    #[error("failed to run {tool}: {source}")]
    Spawn {
        /// Program name
        tool: &'static str,
        /// Underlying spawn error
        #[source]
        source: io::Error,
    },

    /// Fix mode was requested from a tool that can only check
    #[error("{tool} has no fix mode")]
    FixUnsupported {
        /// Program name
        tool: &'static str,
    },

    /// A default config file is not part of the bundled assets
    #[error("bundled config asset missing: {0}")]
    AssetMissing(String),

    /// A version control query failed where an answer was required
    #[error("git: {0}")]
    Vcs(String),
}

/// Convenience result type for fourmat
pub type Result<T> = std::result::Result<T, Error>;
