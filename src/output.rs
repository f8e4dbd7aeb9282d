//! Output formatting for human and JSON modes
//!
//! The tools print their own diagnostics straight to the terminal. This module
//! only renders the per-tool summary that follows them, either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Action, Mode, RunReport, Tool};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Summary of one `check` or `fix` run
#[derive(Debug, Serialize)]
pub struct RunSummary {
    /// Command that ran
    pub command: Action,
    /// Whether every tool that ran passed
    pub passed: bool,
    /// Process exit code
    pub exit_code: i32,
    /// Whether the run was interrupted
    pub cancelled: bool,
    /// Per-tool results, in execution order
    pub tools: Vec<ToolSummary>,
}

/// One tool's entry in a [`RunSummary`]
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ToolSummary {
    /// Tool name
    pub tool: Tool,
    /// Mode it ran in
    pub mode: Mode,
    /// Whether it exited zero
    pub passed: bool,
    /// Exit code, if the process exited normally
    pub exit_code: Option<i32>,
}

impl From<&RunReport> for RunSummary {
    fn from(report: &RunReport) -> Self {
        Self {
            command: report.action,
            passed: report.passed(),
            exit_code: report.exit_code(),
            cancelled: report.cancelled,
            tools: report
                .outcomes
                .iter()
                .map(|o| ToolSummary {
                    tool: o.tool,
                    mode: o.mode,
                    passed: o.passed(),
                    exit_code: o.exit_code,
                })
                .collect(),
        }
    }
}

impl RunSummary {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        // Interrupted runs end silently
        if self.cancelled {
            return;
        }

        if self.tools.is_empty() {
            println!("Nothing to {}.", self.command);
            return;
        }

        for t in &self.tools {
            let status = if t.passed {
                "PASS".green().bold()
            } else {
                "FAIL".red().bold()
            };
            match t.exit_code {
                Some(code) if !t.passed => println!("  {status} {} ({}, exit {code})", t.tool, t.mode),
                None => println!("  {status} {} ({}, killed)", t.tool, t.mode),
                _ => println!("  {status} {} ({})", t.tool, t.mode),
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
