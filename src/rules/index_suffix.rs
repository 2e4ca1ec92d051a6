use std::path::Path;

use crate::{core::ResolvedRoute, issues::IndexSuffixIssue, utils::display_path};

/// Report pages whose file stem ends with `index` but is not `index`.
///
/// Route resolution trims any trailing `index`, so `reindex.astro` becomes
/// `/re`.
pub fn check_index_suffix_issues(
    routes: &[ResolvedRoute],
    root_dir: &Path,
) -> Vec<IndexSuffixIssue> {
    routes
        .iter()
        .filter_map(|route| {
            let stem = route.absolute_path.file_stem()?.to_string_lossy();
            if stem == "index" || !stem.ends_with("index") {
                return None;
            }
            Some(IndexSuffixIssue {
                file_path: display_path(&route.absolute_path, root_dir),
                route: route.path.clone(),
                stem: stem.into_owned(),
            })
        })
        .collect()
}
