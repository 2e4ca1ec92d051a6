//! Parsers for page sources.
//!
//! - `frontmatter`: extracts the `---`-fenced script block of `.astro` files
//! - `ts`: TypeScript parser for that block (uses swc for AST generation)

pub mod frontmatter;
pub mod ts;
