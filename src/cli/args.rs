//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `list`: Resolve and print every route of the project
//! - `check`: Run route diagnostics (duplicates, malformed segments, etc.)
//! - `init`: Initialize the configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::core::BuildOutput;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::List(cmd)) => cmd.common.verbose,
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by route commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory (default: current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Build output mode (overrides config file)
    #[arg(long, value_enum, env = "ASTRO_ROUTES_BUILD_OUTPUT")]
    pub build_output: Option<BuildOutput>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print resolved routes as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    Duplicate,
    Malformed,
    IndexSuffix,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::Duplicate,
            CheckRule::Malformed,
            CheckRule::IndexSuffix,
        ]
    }
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve and print every route of the project
    List(ListCommand),
    /// Check routes for duplicates, malformed segments and trimmed names
    Check(CheckCommand),
    /// Initialize a new .routesrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
