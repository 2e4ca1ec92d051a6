use std::path::Path;

use anyhow::Result;

use super::{CommandResult, CommandSummary};
use crate::{
    cli::args::{CheckCommand, CheckRule},
    core::{ResolvedRoute, RouteContext},
    issues::Issue,
    rules::{
        check_duplicate_route_issues, check_index_suffix_issues, check_malformed_segment_issues,
    },
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = RouteContext::new(&cmd.common)?;
    let routes = ctx.resolve()?;

    let checks = if cmd.checks.is_empty() {
        CheckRule::all()
    } else {
        cmd.checks
    };

    let issues = run_checks(&routes, &ctx.config.root_dir, &checks);
    Ok(CommandResult::new(CommandSummary::Check, issues, routes.len()))
}

/// Run the selected rules over resolved routes.
pub fn run_checks(routes: &[ResolvedRoute], root_dir: &Path, checks: &[CheckRule]) -> Vec<Issue> {
    let mut all_issues: Vec<Issue> = Vec::new();

    for check in checks {
        match check {
            CheckRule::Duplicate => {
                let issues = check_duplicate_route_issues(routes, root_dir);
                all_issues.extend(issues.into_iter().map(Issue::DuplicateRoute));
            }
            CheckRule::Malformed => {
                let issues = check_malformed_segment_issues(routes, root_dir);
                all_issues.extend(issues.into_iter().map(Issue::MalformedSegment));
            }
            CheckRule::IndexSuffix => {
                let issues = check_index_suffix_issues(routes, root_dir);
                all_issues.extend(issues.into_iter().map(Issue::IndexSuffix));
            }
        }
    }

    all_issues
}
