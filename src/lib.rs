//! fourmat - Batteries-included linting and autoformatting for Python projects
//!
//! This library resolves the project a run applies to and drives the three
//! external tools (isort, black, flake8) over its files, either reporting every
//! violation in one pass (`check`) or rewriting files and stopping at the first
//! failure (`fix`).

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod core;
pub mod error;
pub mod file_set;
pub mod orchestrator;
pub mod output;
pub mod paths;
pub mod project;
pub mod shared;

pub use error::{Error, Result};
