//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the pipeline logic and the
//! subprocesses it drives (git and the three lint tools).
//!
//! Implementations live in the `adapters` module; tests substitute their own.

mod runner;
mod vcs;

pub use runner::ToolRunner;
pub use vcs::VersionControl;
