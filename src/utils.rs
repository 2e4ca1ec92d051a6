//! Common utility functions shared across the codebase.

use std::path::{MAIN_SEPARATOR, Path};

/// Rewrites every path separator to `/`.
///
/// Both `\` and the host's native separator are replaced, so route identifiers
/// come out the same regardless of the platform that produced the path.
///
/// # Examples
///
/// ```
/// use astro_routes::utils::normalize_separators;
///
/// assert_eq!(normalize_separators("blog\\[slug].md"), "blog/[slug].md");
/// assert_eq!(normalize_separators("blog/post.astro"), "blog/post.astro");
/// ```
pub fn normalize_separators(value: &str) -> String {
    value
        .chars()
        .map(|c| if c == '\\' || c == MAIN_SEPARATOR { '/' } else { c })
        .collect()
}

/// Path of `path` relative to `root` with `/` separators, for display.
///
/// Falls back to the full path when `path` is not under `root`.
pub fn display_path(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    normalize_separators(&relative.to_string_lossy())
}

/// Pluralizes a count for display: `1 route`, `2 routes`.
pub fn pluralize(count: usize, singular: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}s", count, singular)
    }
}
