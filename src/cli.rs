//! CLI definitions and entry point

use clap::{Args, Parser, Subcommand};

use crate::commands;
use fourmat::output::OutputMode;
use fourmat::shared::CancelFlag;

/// fourmat - Batteries-included linting and autoformatting
#[derive(Parser, Debug)]
#[command(
    name = "fourmat",
    version,
    about = "Batteries-included linting and autoformatting",
    long_about = "Run isort, black and flake8 over a Python project.\n\n\
                  Without FILES, the paths listed in the .fourmat manifest at the\n\
                  project root are used."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check code style. If no file is specified, it will run on all the files
    /// listed in .fourmat
    Check(RunArgs),

    /// Automatically fix code. If no file is specified, it will run on all the
    /// files listed in .fourmat
    Fix(RunArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Override the config files (.flake8, .isort.cfg, pyproject.toml) with
    /// the bundled defaults
    #[arg(short = 'c', long)]
    pub override_config: bool,

    /// Only lint Python files changed against HEAD
    #[arg(long)]
    pub changed: bool,

    /// Only lint Python files with staged changes
    #[arg(long)]
    pub staged: bool,

    /// Files or directories to lint
    pub files: Vec<String>,
}

/// Run the CLI, returning the process exit code
pub fn run() -> anyhow::Result<i32> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let cancel = CancelFlag::new();
    let handler_flag = cancel.clone();
    ctrlc::set_handler(move || handler_flag.cancel())?;

    match cli.command {
        Command::Check(args) => commands::check(args, output_mode, cancel),
        Command::Fix(args) => commands::fix(args, output_mode, cancel),
    }
}
