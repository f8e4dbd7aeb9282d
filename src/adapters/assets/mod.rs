//! Bundled default config files
//!
//! The defaults for isort, black and flake8 are compiled into the binary from
//! the crate's `assets/` directory and written into a project on demand.

use std::fs;
use std::path::{Path, PathBuf};

use include_dir::{Dir, include_dir};

use crate::core::models::Exclusions;
use crate::error::{Error, Result};
use crate::paths::{CONFIGURATION_FILES, ISORT_CONFIG, PROJECT_MANIFEST};

static ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// Contents of the bundled default for `name`
#[must_use]
pub fn default_config(name: &str) -> Option<&'static [u8]> {
    ASSETS.get_file(name).map(include_dir::File::contents)
}

/// Write the bundled config files into `dir`.
///
/// Files already present are kept unless `override_existing` is set.
/// Returns the paths that were written.
pub fn copy_configuration(dir: &Path, override_existing: bool) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for name in CONFIGURATION_FILES {
        let target = dir.join(name);
        if !override_existing && target.exists() {
            log::debug!("keeping existing {}", target.display());
            continue;
        }

        let contents = default_config(name).ok_or_else(|| Error::AssetMissing(name.to_string()))?;
        fs::write(&target, contents)?;
        log::info!("wrote default {name}");
        written.push(target);
    }

    Ok(written)
}

/// Read the project's isort and black config in `dir` and decide which
/// snapshot exclusions still apply. Missing files count as empty.
#[must_use]
pub fn detect_exclusions(dir: &Path) -> Exclusions {
    let isort_cfg = fs::read_to_string(dir.join(ISORT_CONFIG)).unwrap_or_default();
    let pyproject = fs::read_to_string(dir.join(PROJECT_MANIFEST)).unwrap_or_default();
    Exclusions::from_config(&isort_cfg, &pyproject)
}
