//! Invocation modes

use serde::Serialize;

/// How a tool is asked to treat the files it is given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Report only; exit non-zero if anything would change
    Check,
    /// Rewrite files in place
    Fix,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Check => write!(f, "check"),
            Self::Fix => write!(f, "fix"),
        }
    }
}
