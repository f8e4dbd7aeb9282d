//! Subprocess tool runner

use std::process::Command;

use crate::core::models::{Invocation, ToolOutcome};
use crate::core::ports::ToolRunner;
use crate::error::{Error, Result};

/// [`ToolRunner`] that spawns the real executables with inherited stdio
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ToolRunner for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<ToolOutcome> {
        log::debug!("running: {invocation}");

        let status = Command::new(invocation.program())
            .args(invocation.args())
            .status()
            .map_err(|source| Error::Spawn {
                tool: invocation.program(),
                source,
            })?;

        Ok(ToolOutcome {
            tool: invocation.tool(),
            mode: invocation.mode(),
            exit_code: status.code(),
        })
    }
}
