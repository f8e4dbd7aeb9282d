//! Command implementations

mod check;
mod fix;

pub use check::check;
pub use fix::fix;

use fourmat::adapters::{GitCli, ProcessRunner};
use fourmat::core::models::Action;
use fourmat::orchestrator::{Orchestrator, RunOptions};
use fourmat::output::{OutputMode, RunSummary};
use fourmat::project::Project;
use fourmat::shared::CancelFlag;

use crate::cli::RunArgs;

/// Run `action` against the real tools and render its summary.
///
/// Returns the process exit code.
fn execute(action: Action, args: RunArgs, mode: OutputMode, cancel: CancelFlag) -> anyhow::Result<i32> {
    let options = RunOptions {
        files: args.files,
        override_config: args.override_config,
        changed: args.changed,
        staged: args.staged,
    };

    let project = Project::new(GitCli);
    let runner = ProcessRunner;
    let report = Orchestrator::new(&project, &runner, cancel).run(action, &options)?;

    RunSummary::from(&report).render(mode);
    Ok(report.exit_code())
}
