//! Route records produced by each pipeline stage.
//!
//! Each stage consumes the previous record by value and returns a richer one:
//! `RouteFile` (listing) → `RouteFileWithSearch` (enrichment) → `ResolvedRoute`
//! (path resolution). Records are never mutated after creation.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Project output mode.
///
/// Query strings only carry meaning for server-rendered pages, so search
/// schemas are only probed in `Server` mode.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum BuildOutput {
    #[default]
    Static,
    Server,
}

impl std::fmt::Display for BuildOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildOutput::Static => write!(f, "static"),
            BuildOutput::Server => write!(f, "server"),
        }
    }
}

/// The slice of project configuration the route pipeline needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstroConfig {
    /// Project root; pages live under `<root_dir>/src/pages`.
    pub root_dir: PathBuf,
    pub build_output: BuildOutput,
}

impl AstroConfig {
    pub fn new(root_dir: impl Into<PathBuf>, build_output: BuildOutput) -> Self {
        Self {
            root_dir: root_dir.into(),
            build_output,
        }
    }

    /// Directory holding page files.
    pub fn pages_dir(&self) -> PathBuf {
        pages_dir(&self.root_dir)
    }
}

/// `<root>/src/pages`
pub fn pages_dir(root_dir: &Path) -> PathBuf {
    root_dir.join("src").join("pages")
}

/// A page file found by the lister.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteFile {
    pub absolute_path: PathBuf,
}

impl RouteFile {
    pub fn new(absolute_path: impl Into<PathBuf>) -> Self {
        Self {
            absolute_path: absolute_path.into(),
        }
    }

    pub fn with_search(self, has_search_schema: bool) -> RouteFileWithSearch {
        RouteFileWithSearch {
            absolute_path: self.absolute_path,
            has_search_schema,
        }
    }
}

/// A page file with its search-schema flag attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteFileWithSearch {
    pub absolute_path: PathBuf,
    pub has_search_schema: bool,
}

/// A fully resolved route, ready for type generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedRoute {
    pub absolute_path: PathBuf,
    pub has_search_schema: bool,
    /// Canonical route path, e.g. `/blog/[slug]`.
    pub path: String,
    /// Dynamic segment names in path order. `None` when the route has none.
    pub params: Option<Vec<String>>,
}
