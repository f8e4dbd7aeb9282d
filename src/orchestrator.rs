//! The `check` and `fix` pipelines
//!
//! Both run the sorter, the formatter and the style checker, in that order,
//! one after another: later tools must see the files earlier tools rewrote.
//!
//! - `check` runs all three regardless of failures so one pass reports every
//!   violation, then exits 1 if any tool failed.
//! - `fix` stops at the first failing tool and exits with its code, so no
//!   further rewrites are layered on top of a failed one.
//!
//! An interrupt ends the run between steps with whatever status has already
//! accumulated.

use std::fmt;

use crate::adapters::assets;
use crate::core::models::{Action, Invocation, RunReport};
use crate::core::ports::ToolRunner;
use crate::error::Result;
use crate::file_set;
use crate::project::Project;
use crate::shared::{CancelFlag, PathContext};

/// Inputs shared by `check` and `fix`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Explicit paths; empty means "read the project manifest"
    pub files: Vec<String>,
    /// Overwrite existing config files with the bundled defaults
    pub override_config: bool,
    /// Only lint Python files changed against `HEAD`
    pub changed: bool,
    /// Only lint Python files with staged changes (implies `changed`)
    pub staged: bool,
}

/// Drives one pipeline run
pub struct Orchestrator<'a> {
    project: &'a Project,
    runner: &'a dyn ToolRunner,
    cancel: CancelFlag,
}

impl<'a> Orchestrator<'a> {
    /// Create an orchestrator over `project`, running tools through `runner`
    #[must_use]
    pub fn new(project: &'a Project, runner: &'a dyn ToolRunner, cancel: CancelFlag) -> Self {
        Self {
            project,
            runner,
            cancel,
        }
    }

    /// Run the `check` pipeline
    pub fn check(&self, options: &RunOptions) -> Result<RunReport> {
        self.run(Action::Check, options)
    }

    /// Run the `fix` pipeline
    pub fn fix(&self, options: &RunOptions) -> Result<RunReport> {
        self.run(Action::Fix, options)
    }

    /// Run `action` to completion, to its first failure (`fix`), or to an
    /// interrupt.
    ///
    /// Config files always go to the project root. When the file set comes
    /// from the manifest, the working directory is also the project root for
    /// the duration of the run and is restored afterwards; explicit files run
    /// from the current directory.
    pub fn run(&self, action: Action, options: &RunOptions) -> Result<RunReport> {
        let mut report = RunReport::new(action);
        if self.interrupted(&mut report) {
            return Ok(report);
        }

        let root = self.project.root()?.to_path_buf();
        let (files, _root_context) = if options.files.is_empty() {
            let files = file_set::read_manifest(&root)?;
            (files, Some(PathContext::enter(&root)?))
        } else {
            (options.files.clone(), None)
        };

        let files = if options.changed || options.staged {
            let changed = self.project.vcs().changed_files(&files, options.staged)?;
            let sources = file_set::python_sources(changed);
            if sources.is_empty() {
                log::info!("No changed Python files.");
                return Ok(report);
            }
            sources
        } else {
            files
        };
        log::debug!("{action}: {} path(s): {}", files.len(), files.join(" "));

        if self.interrupted(&mut report) {
            return Ok(report);
        }

        assets::copy_configuration(&root, options.override_config)?;
        let exclusions = assets::detect_exclusions(&root);

        for step in action.steps() {
            if self.interrupted(&mut report) {
                break;
            }

            let invocation = Invocation::new(step.tool(), step.mode(), &files, exclusions)?;
            let outcome = self.runner.run(&invocation)?;

            // The tool most likely died from the same interrupt; its result is
            // not a finding.
            if self.interrupted(&mut report) {
                break;
            }

            report.outcomes.push(outcome);
            if !outcome.passed() {
                log::warn!("{} failed in {} mode (exit {})", outcome.tool, outcome.mode, outcome.code());
                if action.fails_fast() {
                    break;
                }
            }
        }

        Ok(report)
    }

    fn interrupted(&self, report: &mut RunReport) -> bool {
        if self.cancel.is_cancelled() {
            log::debug!("interrupted, skipping remaining steps");
            report.cancelled = true;
        }
        report.cancelled
    }
}

impl fmt::Debug for Orchestrator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Orchestrator")
            .field("project", self.project)
            .field("cancel", &self.cancel)
            .finish_non_exhaustive()
    }
}
