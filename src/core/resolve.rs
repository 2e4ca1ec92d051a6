//! Path resolution - turning a page file path into a route path.
//!
//! Resolution is an ordered chain of pure string transforms. Each step works on
//! the output of the previous one and the order is significant:
//!
//! 1. relative to the pages root
//! 2. normalize separators
//! 3. trim the file extension
//! 4. trim a trailing `index`
//! 5. trim a trailing slash
//! 6. add a leading slash
//! 7. extract bracketed params
//!
//! Steps 4 and 5 stay separate: `blog/index` becomes `blog/` and only then
//! `blog`. Step 4 is a plain suffix match, so `reindex` becomes `re`.

use std::{path::Path, sync::LazyLock};

use anyhow::{Result, anyhow};
use rayon::prelude::*;
use regex::Regex;

use crate::{
    core::types::{ResolvedRoute, RouteFileWithSearch},
    utils::normalize_separators,
};

static EXTENSION_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.([^.]+)$").unwrap());
static INDEX_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"index$").unwrap());
static PARAM_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[[^\]]+\]").unwrap());

/// Route path and params derived from a single file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePath {
    pub path: String,
    pub params: Option<Vec<String>>,
}

/// Path of `absolute_path` relative to `pages_dir`, as a string.
pub fn relative_to_pages(absolute_path: &Path, pages_dir: &Path) -> Result<String> {
    let relative = absolute_path.strip_prefix(pages_dir).map_err(|_| {
        anyhow!(
            "Route file {} is not inside pages directory {}",
            absolute_path.display(),
            pages_dir.display()
        )
    })?;
    Ok(relative.to_string_lossy().into_owned())
}

/// Removes the last `.ext` suffix only: `a.b.astro` → `a.b`.
pub fn trim_file_extension(value: &str) -> String {
    EXTENSION_REGEX.replace(value, "").into_owned()
}

/// Removes a literal trailing `index`, without checking for a segment boundary.
pub fn trim_index(value: &str) -> String {
    INDEX_REGEX.replace(value, "").into_owned()
}

/// Removes one trailing `/`.
pub fn trim_trailing_slash(value: &str) -> String {
    value.strip_suffix('/').unwrap_or(value).to_string()
}

/// Prefixes `/` unless already present.
pub fn add_leading_slash(value: &str) -> String {
    if value.starts_with('/') {
        value.to_string()
    } else {
        format!("/{}", value)
    }
}

/// Names of all `[...]` groups in left-to-right order, brackets removed.
///
/// Unbalanced brackets are tolerated: a `[` without a closing `]` simply does
/// not produce a param. Returns `None` when there are no params.
pub fn extract_params(value: &str) -> Option<Vec<String>> {
    let params: Vec<String> = PARAM_REGEX
        .find_iter(value)
        .map(|m| m.as_str().replace(['[', ']'], ""))
        .collect();

    if params.is_empty() { None } else { Some(params) }
}

/// Runs the full transform chain on one file path.
pub fn resolve_route_path(absolute_path: &Path, pages_dir: &Path) -> Result<RoutePath> {
    let relative_path = relative_to_pages(absolute_path, pages_dir)?;
    let with_normalized_separators = normalize_separators(&relative_path);
    let without_extension = trim_file_extension(&with_normalized_separators);
    let without_index = trim_index(&without_extension);
    let without_trailing_slash = trim_trailing_slash(&without_index);
    let path = add_leading_slash(&without_trailing_slash);
    let params = extract_params(&path);

    Ok(RoutePath { path, params })
}

/// Resolves one enriched route file.
pub fn resolve_route(route: RouteFileWithSearch, pages_dir: &Path) -> Result<ResolvedRoute> {
    let RoutePath { path, params } = resolve_route_path(&route.absolute_path, pages_dir)?;

    Ok(ResolvedRoute {
        absolute_path: route.absolute_path,
        has_search_schema: route.has_search_schema,
        path,
        params,
    })
}

/// Resolves a batch of enriched route files in parallel.
///
/// Output order matches input order. The first failure fails the batch.
pub fn resolve_routes_batch(
    routes: Vec<RouteFileWithSearch>,
    pages_dir: &Path,
) -> Result<Vec<ResolvedRoute>> {
    routes
        .into_par_iter()
        .map(|route| resolve_route(route, pages_dir))
        .collect()
}
