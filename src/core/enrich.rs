//! Route enrichment - attaching the search-schema flag to each page file.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::task::JoinSet;

use crate::core::{
    search::SearchSchemaDetector,
    types::{BuildOutput, RouteFile, RouteFileWithSearch},
};

/// Attach `has_search_schema` to every route file.
///
/// In `Static` mode every flag is `false` and the detector is never called.
/// In `Server` mode one probe task is spawned per file and all of them are
/// joined before returning. Output order matches input order.
///
/// # Errors
///
/// The first failing probe fails the whole batch. Dropping the join set
/// aborts the probes still in flight and their results are discarded.
pub async fn enrich_routes<D: SearchSchemaDetector>(
    routes: Vec<RouteFile>,
    build_output: BuildOutput,
    detector: Arc<D>,
) -> Result<Vec<RouteFileWithSearch>> {
    if build_output == BuildOutput::Static {
        return Ok(routes
            .into_iter()
            .map(|route| route.with_search(false))
            .collect());
    }

    let mut probes = JoinSet::new();
    for (index, route) in routes.iter().enumerate() {
        let detector = Arc::clone(&detector);
        let path = route.absolute_path.clone();
        probes.spawn(async move {
            let has_search_schema = detector.has_search_schema(&path).await.with_context(|| {
                format!("Failed to detect search schema in {}", path.display())
            })?;
            Ok::<_, anyhow::Error>((index, has_search_schema))
        });
    }

    let mut flags = vec![false; routes.len()];
    while let Some(joined) = probes.join_next().await {
        let (index, has_search_schema) = joined.context("Search schema probe task failed")??;
        flags[index] = has_search_schema;
    }

    Ok(routes
        .into_iter()
        .zip(flags)
        .map(|(route, has_search_schema)| route.with_search(has_search_schema))
        .collect())
}
