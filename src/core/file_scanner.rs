use std::{ffi::OsStr, path::Path};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::core::types::{RouteFile, pages_dir};

/// Extensions the host framework turns into pages.
pub const PAGE_EXTENSIONS: &[&str] = &["astro", "md", "mdx", "html"];

/// Options for listing route files.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Glob patterns for page files to skip. Relative patterns are matched
    /// against the path below the pages directory, `**/` patterns against the
    /// absolute path.
    pub ignores: Vec<String>,
    pub verbose: bool,
}

/// List every page file under `<root_dir>/src/pages`.
///
/// Entries are walked in file-name order so output is stable for display.
/// Callers must not rely on the order for correctness. Dot-prefixed files and
/// directories are skipped and symlinks are followed.
///
/// # Errors
///
/// Fails if the pages directory does not exist, if an ignore pattern is
/// invalid, or if any entry cannot be read. No partial list is returned.
pub fn list_route_files(root_dir: &Path, options: &ScanOptions) -> Result<Vec<RouteFile>> {
    let root_dir = std::path::absolute(root_dir)
        .with_context(|| format!("Invalid root directory: {}", root_dir.display()))?;
    let pages_dir = pages_dir(&root_dir);

    if !pages_dir.is_dir() {
        bail!("Pages directory not found: {}", pages_dir.display());
    }

    let ignore_patterns = compile_ignores(&options.ignores)?;
    let mut files = Vec::new();

    let walker = WalkDir::new(&pages_dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()));

    for entry in walker {
        let entry = entry
            .with_context(|| format!("Cannot read pages directory: {}", pages_dir.display()))?;
        let path = entry.path();

        if !entry.file_type().is_file() || !is_page_file(path) {
            continue;
        }

        if is_ignored(path, &pages_dir, &ignore_patterns) {
            if options.verbose {
                eprintln!(
                    "{} Ignoring page file: {}",
                    "note:".bold().cyan(),
                    path.display()
                );
            }
            continue;
        }

        files.push(RouteFile::new(path.to_path_buf()));
    }

    Ok(files)
}

fn compile_ignores(ignores: &[String]) -> Result<Vec<Pattern>> {
    ignores
        .iter()
        .map(|p| Pattern::new(p).with_context(|| format!("Invalid ignore pattern: \"{}\"", p)))
        .collect()
}

fn is_ignored(path: &Path, pages_dir: &Path, patterns: &[Pattern]) -> bool {
    if patterns.is_empty() {
        return false;
    }

    let relative = path.strip_prefix(pages_dir).unwrap_or(path);
    patterns
        .iter()
        .any(|p| p.matches_path(relative) || p.matches_path(path))
}

fn is_hidden(name: &OsStr) -> bool {
    name.to_str().is_some_and(|n| n.starts_with('.'))
}

pub fn is_page_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| PAGE_EXTENSIONS.contains(&ext))
}
