//! Validated argv for one tool run

use super::{Exclusions, Mode, Tool};
use crate::error::{Error, Result};
use crate::paths::{SNAPSHOT_GLOB, SNAPSHOT_REGEX};

/// A tool, a mode and the full argument list, ready to be spawned
///
/// Construction is the only place the fix-mode contract is checked, so an
/// `Invocation` that exists is always one the tool can honour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    tool: Tool,
    mode: Mode,
    args: Vec<String>,
}

impl Invocation {
    /// Build the argv for `tool` in `mode` over `files`.
    ///
    /// Paths always trail a `--` separator. Fails with
    /// [`Error::FixUnsupported`] when fix mode is requested from a check-only
    /// tool.
    pub fn new(tool: Tool, mode: Mode, files: &[String], exclusions: Exclusions) -> Result<Self> {
        if mode == Mode::Fix && !tool.supports_fix() {
            return Err(Error::FixUnsupported {
                tool: tool.program(),
            });
        }

        let check = mode == Mode::Check;
        let mut args: Vec<String> = Vec::new();

        match tool {
            Tool::Isort => {
                if check {
                    args.extend(["--check", "--diff"].map(String::from));
                }
                if exclusions.sorter_snapshots {
                    args.extend(["--skip-glob", SNAPSHOT_GLOB].map(String::from));
                }
                args.extend(["--atomic", "--quiet"].map(String::from));
            },
            Tool::Black => {
                if check {
                    args.extend(["--check", "--diff"].map(String::from));
                }
                if exclusions.formatter_snapshots {
                    args.extend(["--exclude", SNAPSHOT_REGEX].map(String::from));
                }
                args.push("--quiet".into());
            },
            Tool::Flake8 => {},
        }

        args.push("--".into());
        args.extend(files.iter().cloned());

        Ok(Self { tool, mode, args })
    }

    /// The tool being run
    #[must_use]
    pub const fn tool(&self) -> Tool {
        self.tool
    }

    /// The mode the tool runs in
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Executable name
    #[must_use]
    pub const fn program(&self) -> &'static str {
        self.tool.program()
    }

    /// Arguments, not including the program name
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.program(), self.args.join(" "))
    }
}
