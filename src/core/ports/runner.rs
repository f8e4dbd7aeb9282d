//! Tool runner port

use crate::core::models::{Invocation, ToolOutcome};

/// Runs one tool invocation to completion
///
/// The tool runs in the current working directory. A non-zero exit is a
/// [`ToolOutcome`] that did not pass; `Err` is reserved for failing to run the
/// tool at all.
pub trait ToolRunner {
    /// Run `invocation` and wait for it to exit
    fn run(&self, invocation: &Invocation) -> crate::Result<ToolOutcome>;
}
