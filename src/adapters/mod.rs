//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `git/` - Working tree detection and changed files via the `git` CLI
//! - `process/` - Runs lint tools as blocking subprocesses
//! - `assets/` - Bundled default config files

pub mod assets;
pub mod git;
pub mod process;

pub use git::GitCli;
pub use process::ProcessRunner;
