//! Check code style without modifying files

use fourmat::core::models::Action;
use fourmat::output::OutputMode;
use fourmat::shared::CancelFlag;

use crate::cli::RunArgs;

/// Run every tool in check mode; exit code 1 if any of them fails
pub fn check(args: RunArgs, mode: OutputMode, cancel: CancelFlag) -> anyhow::Result<i32> {
    super::execute(Action::Check, args, mode, cancel)
}
