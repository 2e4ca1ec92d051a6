use std::path::PathBuf;

use crate::{
    core::{BuildOutput, ResolvedRoute},
    issues::{Issue, Severity},
};

#[derive(Debug)]
pub enum CommandSummary {
    List(ListSummary),
    Check,
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ListSummary {
    pub routes: Vec<ResolvedRoute>,
    pub root_dir: PathBuf,
    pub build_output: BuildOutput,
    pub json: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// All issues found by `check`. Empty for other commands.
    pub issues: Vec<Issue>,
    /// Number of routes the command looked at.
    pub routes_checked: usize,
}

impl CommandResult {
    pub fn new(summary: CommandSummary, mut issues: Vec<Issue>, routes_checked: usize) -> Self {
        issues.sort();

        let mut error_count = issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
            .count();
        let warning_count = issues.len() - error_count;

        if let CommandSummary::Init(InitSummary { created: false }) = &summary {
            error_count += 1;
        }

        Self {
            summary,
            error_count,
            warning_count,
            issues,
            routes_checked,
        }
    }
}
