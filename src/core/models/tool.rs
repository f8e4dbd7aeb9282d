//! The external tools and the order they run in

use serde::Serialize;

use super::Mode;

/// One of the three external tools fourmat drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Import sorter
    Isort,
    /// Code formatter
    Black,
    /// Style checker (check only)
    Flake8,
}

impl Tool {
    /// Executable name, looked up on `PATH`
    #[must_use]
    pub const fn program(self) -> &'static str {
        match self {
            Self::Isort => "isort",
            Self::Black => "black",
            Self::Flake8 => "flake8",
        }
    }

    /// Whether the tool can rewrite files
    #[must_use]
    pub const fn supports_fix(self) -> bool {
        !matches!(self, Self::Flake8)
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.program())
    }
}

/// A tool that has a fix mode
///
/// The fix pipeline is built from these, so the style checker cannot be
/// scheduled to fix anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixer {
    /// Import sorter
    Isort,
    /// Code formatter
    Black,
}

impl From<Fixer> for Tool {
    fn from(fixer: Fixer) -> Self {
        match fixer {
            Fixer::Isort => Self::Isort,
            Fixer::Black => Self::Black,
        }
    }
}

/// One step of a pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Run a tool in check mode
    Check(Tool),
    /// Run a fixer in fix mode
    Fix(Fixer),
}

impl Step {
    /// The tool this step runs
    #[must_use]
    pub fn tool(self) -> Tool {
        match self {
            Self::Check(tool) => tool,
            Self::Fix(fixer) => fixer.into(),
        }
    }

    /// The mode this step runs the tool in
    #[must_use]
    pub const fn mode(self) -> Mode {
        match self {
            Self::Check(_) => Mode::Check,
            Self::Fix(_) => Mode::Fix,
        }
    }
}

/// A top-level command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Report every violation from every tool
    Check,
    /// Rewrite files, stopping at the first failing tool
    Fix,
}

impl Action {
    /// Steps in execution order: sorter, formatter, then checker
    #[must_use]
    pub const fn steps(self) -> [Step; 3] {
        match self {
            Self::Check => [
                Step::Check(Tool::Isort),
                Step::Check(Tool::Black),
                Step::Check(Tool::Flake8),
            ],
            Self::Fix => [
                Step::Fix(Fixer::Isort),
                Step::Fix(Fixer::Black),
                Step::Check(Tool::Flake8),
            ],
        }
    }

    /// Whether the first failing step ends the run
    #[must_use]
    pub const fn fails_fast(self) -> bool {
        matches!(self, Self::Fix)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Check => write!(f, "check"),
            Self::Fix => write!(f, "fix"),
        }
    }
}
