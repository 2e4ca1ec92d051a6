//! astro-routes - typed route resolution for Astro projects
//!
//! Scans an Astro project's `src/pages` directory, resolves each page file
//! into its URL route path with dynamic parameters, and flags pages that
//! declare a search-parameter schema. Available as a library, a CLI, and an
//! MCP server.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Route resolution pipeline (list, enrich, resolve)
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `rules`: Route diagnostics
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
pub mod rules;
pub mod utils;
