//! Fix code in place

use fourmat::core::models::Action;
use fourmat::output::OutputMode;
use fourmat::shared::CancelFlag;

use crate::cli::RunArgs;

/// Sort imports, format, then check style, stopping at the first failure
pub fn fix(args: RunArgs, mode: OutputMode, cancel: CancelFlag) -> anyhow::Result<i32> {
    super::execute(Action::Fix, args, mode, cancel)
}
