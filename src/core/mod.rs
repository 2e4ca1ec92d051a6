//! Route resolution engine.
//!
//! Pages are processed in three stages:
//!
//! 1. **Listing** (`file_scanner`): walk `src/pages` for page files
//! 2. **Enrichment** (`enrich`, `search`): probe each page for a search schema
//! 3. **Resolution** (`resolve`): turn each file path into a route path
//!
//! `pipeline` chains the stages and `context` builds their inputs from
//! configuration and command-line overrides.

pub mod context;
pub mod enrich;
pub mod file_scanner;
pub mod parsers;
pub mod pipeline;
pub mod resolve;
pub mod search;
pub mod types;

pub use context::RouteContext;
pub use pipeline::{resolve_routes, resolve_routes_blocking, resolve_routes_with};
pub use search::{FrontmatterDetector, SearchSchemaDetector};
pub use types::{
    AstroConfig, BuildOutput, ResolvedRoute, RouteFile, RouteFileWithSearch, pages_dir,
};
