//! Shared utilities used across the codebase
//!
//! - [`path_context`] - Scoped working-directory changes
//! - [`cancel`] - Interrupt signal checked between pipeline steps

pub mod cancel;
pub mod path_context;

pub use cancel::CancelFlag;
pub use path_context::PathContext;
