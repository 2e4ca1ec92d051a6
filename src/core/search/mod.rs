//! Search-schema detection.
//!
//! The detector is a seam: the enricher only knows the `SearchSchemaDetector`
//! trait. `FrontmatterDetector` is the default implementation, parsing the
//! frontmatter of `.astro` pages with swc.

mod exports;

use std::{
    fs,
    future::Future,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use swc_ecma_visit::VisitWith;

pub use exports::SearchSchemaCollector;

use crate::core::parsers::{frontmatter::extract_frontmatter, ts::parse_ts_source};

/// Reports whether a page file declares a search-parameter schema.
pub trait SearchSchemaDetector: Send + Sync + 'static {
    fn has_search_schema(&self, path: &Path) -> impl Future<Output = Result<bool>> + Send;
}

/// Detects search schemas by parsing `.astro` frontmatter.
///
/// Other page kinds never declare a schema and are answered without reading
/// the file. Reading and parsing run on tokio's blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrontmatterDetector;

impl SearchSchemaDetector for FrontmatterDetector {
    fn has_search_schema(&self, path: &Path) -> impl Future<Output = Result<bool>> + Send {
        let path: PathBuf = path.to_path_buf();
        async move {
            if !is_astro_file(&path) {
                return Ok(false);
            }
            tokio::task::spawn_blocking(move || probe_file(&path))
                .await
                .context("Search schema probe did not complete")?
        }
    }
}

fn is_astro_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("astro")
}

/// Read and inspect one `.astro` file.
pub fn probe_file(path: &Path) -> Result<bool> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read page file: {}", path.display()))?;
    detect_in_source(&source, &path.to_string_lossy())
}

/// Inspect `.astro` source text.
pub fn detect_in_source(source: &str, file_path: &str) -> Result<bool> {
    let Some(frontmatter) = extract_frontmatter(source)
        .with_context(|| format!("Invalid frontmatter in {}", file_path))?
    else {
        return Ok(false);
    };

    let module = parse_ts_source(frontmatter.to_string(), file_path)?;
    let mut collector = SearchSchemaCollector::default();
    module.visit_with(&mut collector);

    Ok(collector.found)
}
