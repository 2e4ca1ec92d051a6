use std::path::Path;

use crate::{
    core::ResolvedRoute,
    issues::{MalformedSegmentIssue, MalformedSegmentReason},
    utils::display_path,
};

pub fn check_malformed_segment_issues(
    routes: &[ResolvedRoute],
    root_dir: &Path,
) -> Vec<MalformedSegmentIssue> {
    routes
        .iter()
        .filter_map(|route| {
            find_malformed_segment(&route.path).map(|reason| MalformedSegmentIssue {
                file_path: display_path(&route.absolute_path, root_dir),
                route: route.path.clone(),
                reason,
            })
        })
        .collect()
}

/// First bracket problem in a route path, if any.
///
/// Nested `[` counts as unbalanced.
pub fn find_malformed_segment(path: &str) -> Option<MalformedSegmentReason> {
    let mut open = false;
    let mut empty = false;
    let mut prev = None;

    for c in path.chars() {
        match c {
            '[' if open => return Some(MalformedSegmentReason::Unbalanced),
            '[' => open = true,
            ']' if !open => return Some(MalformedSegmentReason::Unbalanced),
            ']' => {
                open = false;
                if prev == Some('[') {
                    empty = true;
                }
            }
            _ => {}
        }
        prev = Some(c);
    }

    if open {
        Some(MalformedSegmentReason::Unbalanced)
    } else if empty {
        Some(MalformedSegmentReason::EmptyParam)
    } else {
        None
    }
}
