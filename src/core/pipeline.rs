//! Route resolution pipeline: list → enrich → resolve.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::core::{
    enrich::enrich_routes,
    file_scanner::{ScanOptions, list_route_files},
    resolve::resolve_routes_batch,
    search::SearchSchemaDetector,
    types::{AstroConfig, ResolvedRoute, pages_dir},
};

/// Resolve every page of the project into a route record.
///
/// Any scan, probe, or resolution failure fails the whole call; no partial
/// route set is returned.
pub async fn resolve_routes<D: SearchSchemaDetector>(
    config: &AstroConfig,
    detector: Arc<D>,
) -> Result<Vec<ResolvedRoute>> {
    resolve_routes_with(config, &ScanOptions::default(), detector).await
}

/// [`resolve_routes`] with explicit scan options.
pub async fn resolve_routes_with<D: SearchSchemaDetector>(
    config: &AstroConfig,
    options: &ScanOptions,
    detector: Arc<D>,
) -> Result<Vec<ResolvedRoute>> {
    let root_dir = std::path::absolute(&config.root_dir)
        .with_context(|| format!("Invalid root directory: {}", config.root_dir.display()))?;
    let route_files = list_route_files(&root_dir, options)?;
    let routes_with_search = enrich_routes(route_files, config.build_output, detector).await?;

    resolve_routes_batch(routes_with_search, &pages_dir(&root_dir))
}

/// Blocking entry point for synchronous callers such as the CLI.
pub fn resolve_routes_blocking<D: SearchSchemaDetector>(
    config: &AstroConfig,
    options: &ScanOptions,
    detector: Arc<D>,
) -> Result<Vec<ResolvedRoute>> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(resolve_routes_with(config, options, detector))
}
