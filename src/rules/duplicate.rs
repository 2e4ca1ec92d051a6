//! Duplicate route detection.
//!
//! Two files can land on the same route, e.g. `blog.astro` and
//! `blog/index.md` both resolve to `/blog`.

use std::{collections::HashMap, path::Path};

use crate::{core::ResolvedRoute, issues::DuplicateRouteIssue, utils::display_path};

/// Report every file whose route path was already claimed by another file.
///
/// Files are visited in path order, so the first file (by path) owns the
/// route and each later one gets one issue.
pub fn check_duplicate_route_issues(
    routes: &[ResolvedRoute],
    root_dir: &Path,
) -> Vec<DuplicateRouteIssue> {
    let mut sorted: Vec<(String, &str)> = routes
        .iter()
        .map(|r| (display_path(&r.absolute_path, root_dir), r.path.as_str()))
        .collect();
    sorted.sort();

    let mut owners: HashMap<&str, &str> = HashMap::new();
    let mut issues = Vec::new();

    for (file_path, route) in &sorted {
        match owners.get(route) {
            Some(existing) => issues.push(DuplicateRouteIssue {
                file_path: file_path.clone(),
                route: route.to_string(),
                existing_file_path: existing.to_string(),
            }),
            None => {
                owners.insert(*route, file_path.as_str());
            }
        }
    }

    issues
}
