//! Centralized file name definitions for fourmat
//!
//! Single source of truth for every fixed name fourmat looks for on disk.
//!
//! ## Project Layout
//!
//! ```text
//! project/                 # Project root
//! ├── .fourmat             # Manifest: whitespace-separated paths to lint
//! ├── pyproject.toml       # Project manifest (also black's config)
//! ├── .isort.cfg           # Copied from bundled defaults when absent
//! ├── .flake8              # Copied from bundled defaults when absent
//! └── pkg/
//!     └── tests/snapshots/
//!         └── snap_api.py  # Generated snapshot, never sorted or formatted
//! ```

use std::path::{Path, PathBuf};

/// Manifest listing the paths to lint; also marks a project root
pub const MANIFEST_FILE: &str = ".fourmat";

/// Python project manifest; marks a project root
pub const PROJECT_MANIFEST: &str = "pyproject.toml";

/// isort configuration file
pub const ISORT_CONFIG: &str = ".isort.cfg";

/// flake8 configuration file
pub const FLAKE8_CONFIG: &str = ".flake8";

/// Config files copied from the bundled defaults into the project root
pub const CONFIGURATION_FILES: [&str; 3] = [FLAKE8_CONFIG, ISORT_CONFIG, PROJECT_MANIFEST];

/// Glob matching generated snapshot test files (isort syntax)
pub const SNAPSHOT_GLOB: &str = "*/snapshots/snap_*.py";

/// Regex matching generated snapshot test files (black syntax)
pub const SNAPSHOT_REGEX: &str = r".*\/snapshots\/snap_.*\.py";

/// Files whose direct presence in a directory makes it a project root
pub const ROOT_MARKERS: [&str; 2] = [PROJECT_MANIFEST, MANIFEST_FILE];

/// Get path to the manifest inside `root`.
#[must_use]
pub fn manifest(root: &Path) -> PathBuf {
    root.join(MANIFEST_FILE)
}
