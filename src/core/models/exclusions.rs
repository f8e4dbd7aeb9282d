//! Snapshot-file exclusion settings
//!
//! Generated snapshot tests are excluded from sorting and formatting unless the
//! project already declares its own exclusion pattern for that tool. Detection
//! is a plain substring test on the raw config text, not a config parse.

/// isort setting that, when present, means the project manages its own skips
const SORTER_KEY: &str = "extend_skip_glob";

/// black setting that, when present, means the project manages its own excludes
const FORMATTER_KEY: &str = "extend-exclude";

/// Which tools get the snapshot exclusion pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exclusions {
    /// Pass the snapshot glob to isort
    pub sorter_snapshots: bool,
    /// Pass the snapshot regex to black
    pub formatter_snapshots: bool,
}

impl Default for Exclusions {
    fn default() -> Self {
        Self {
            sorter_snapshots: true,
            formatter_snapshots: true,
        }
    }
}

impl Exclusions {
    /// Derive exclusions from the raw text of `.isort.cfg` and `pyproject.toml`.
    ///
    /// Pass an empty string for a file that does not exist.
    #[must_use]
    pub fn from_config(isort_cfg: &str, pyproject: &str) -> Self {
        Self {
            sorter_snapshots: !(isort_cfg.contains(SORTER_KEY) || pyproject.contains(SORTER_KEY)),
            formatter_snapshots: !pyproject.contains(FORMATTER_KEY),
        }
    }
}
