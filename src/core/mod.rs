//! Core domain for fourmat
//!
//! Plain data and trait definitions with no I/O of their own.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Tool, Mode, Invocation, ToolOutcome, RunReport)
//! - `ports/` - Trait definitions for the subprocesses fourmat drives

pub mod models;
pub mod ports;
