//! Results of running tools

use super::{Action, Mode, Tool};

/// Exit code reported for a tool that ended without one (killed by a signal)
const SIGNALLED_EXIT_CODE: i32 = 1;

/// The result of one tool run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolOutcome {
    /// Tool that ran
    pub tool: Tool,
    /// Mode it ran in
    pub mode: Mode,
    /// Process exit code; `None` if terminated by a signal
    pub exit_code: Option<i32>,
}

impl ToolOutcome {
    /// Whether the tool exited zero
    #[must_use]
    pub const fn passed(&self) -> bool {
        matches!(self.exit_code, Some(0))
    }

    /// Exit code to surface for this outcome
    #[must_use]
    pub fn code(&self) -> i32 {
        self.exit_code.unwrap_or(SIGNALLED_EXIT_CODE)
    }
}

/// Accumulated outcomes of one `check` or `fix` run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Which command produced the report
    pub action: Action,
    /// Outcomes in execution order
    pub outcomes: Vec<ToolOutcome>,
    /// Whether the run stopped early because of an interrupt
    pub cancelled: bool,
}

impl RunReport {
    /// Create an empty (passing) report
    #[must_use]
    pub const fn new(action: Action) -> Self {
        Self {
            action,
            outcomes: Vec::new(),
            cancelled: false,
        }
    }

    /// Whether every tool that ran passed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(ToolOutcome::passed)
    }

    /// First failing outcome, if any
    #[must_use]
    pub fn first_failure(&self) -> Option<&ToolOutcome> {
        self.outcomes.iter().find(|o| !o.passed())
    }

    /// Process exit code for this report
    ///
    /// `check` exits 1 on any failure; `fix` exits with the first failing
    /// tool's own code.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match (self.action, self.first_failure()) {
            (_, None) => 0,
            (Action::Check, Some(_)) => 1,
            (Action::Fix, Some(failure)) => failure.code(),
        }
    }
}
