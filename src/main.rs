//! fourmat - Batteries-included linting and autoformatting for Python projects
//!
//! Runs isort, black and flake8 over a project in one command, either
//! reporting every violation (`check`) or fixing what can be fixed (`fix`).

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

mod cli;
mod commands;

/// Exit code for errors that kept the tools from running at all
const ERROR_EXIT_CODE: i32 = 2;

/// Main entry point for the fourmat CLI
fn main() {
    match cli::run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(ERROR_EXIT_CODE);
        },
    }
}
