//! Domain models for fourmat
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Tool`] - One of the three external tools
//! - [`Mode`] - Report-only or rewrite-in-place
//! - [`Action`] / [`Step`] - The fixed tool order of `check` and `fix`
//! - [`Invocation`] - A validated argv for one tool run
//! - [`ToolOutcome`] / [`RunReport`] - What happened

mod exclusions;
mod invocation;
mod mode;
mod outcome;
mod tool;

pub use exclusions::Exclusions;
pub use invocation::Invocation;
pub use mode::Mode;
pub use outcome::{RunReport, ToolOutcome};
pub use tool::{Action, Fixer, Step, Tool};
