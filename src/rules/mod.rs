//! Route diagnostics.
//!
//! Each rule is a pure function over the resolved routes of one project and
//! returns its own issue type. File paths in issues are relative to the
//! project root.
//!
//! - `duplicate`: several files resolving to one route path
//! - `malformed`: brackets that do not form valid dynamic segments
//! - `index_suffix`: names whose trailing `index` was trimmed

pub mod duplicate;
pub mod index_suffix;
pub mod malformed;

pub use duplicate::check_duplicate_route_issues;
pub use index_suffix::check_index_suffix_issues;
pub use malformed::check_malformed_segment_issues;
