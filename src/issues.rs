//! Issue types for route diagnostics.
//!
//! Each issue is self-contained with everything the reporters (CLI, MCP)
//! need to display it.

use enum_dispatch::enum_dispatch;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    DuplicateRoute,
    MalformedSegment,
    IndexSuffix,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::DuplicateRoute => write!(f, "duplicate-route"),
            Rule::MalformedSegment => write!(f, "malformed-segment"),
            Rule::IndexSuffix => write!(f, "index-suffix"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Two page files resolve to the same route path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateRouteIssue {
    /// The later of the colliding files.
    pub file_path: String,
    pub route: String,
    /// The file that claimed the route first.
    pub existing_file_path: String,
}

impl DuplicateRouteIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::DuplicateRoute
    }
}

/// Why a route path has a malformed dynamic segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedSegmentReason {
    /// `[` and `]` do not pair up.
    Unbalanced,
    /// A `[]` group with no parameter name.
    EmptyParam,
}

impl std::fmt::Display for MalformedSegmentReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedSegmentReason::Unbalanced => write!(f, "unbalanced brackets"),
            MalformedSegmentReason::EmptyParam => write!(f, "empty parameter name `[]`"),
        }
    }
}

/// Route path whose brackets do not form valid dynamic segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedSegmentIssue {
    pub file_path: String,
    pub route: String,
    pub reason: MalformedSegmentReason,
}

impl MalformedSegmentIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::MalformedSegment
    }
}

/// File stem ends with `index` without being `index`, so part of the name
/// was trimmed from the route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSuffixIssue {
    pub file_path: String,
    pub route: String,
    pub stem: String,
}

impl IndexSuffixIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::IndexSuffix
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A route issue found by `check`.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    DuplicateRoute(DuplicateRouteIssue),
    MalformedSegment(MalformedSegmentIssue),
    IndexSuffix(IndexSuffixIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::DuplicateRoute(_) => DuplicateRouteIssue::severity(),
            Issue::MalformedSegment(_) => MalformedSegmentIssue::severity(),
            Issue::IndexSuffix(_) => IndexSuffixIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::DuplicateRoute(_) => DuplicateRouteIssue::rule(),
            Issue::MalformedSegment(_) => MalformedSegmentIssue::rule(),
            Issue::IndexSuffix(_) => IndexSuffixIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI and MCP output)
// ============================================================

/// Trait for types that can be reported.
///
/// Uses `enum_dispatch` for static dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Page file the issue points at, relative to the project root.
    fn file_path(&self) -> &str;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for DuplicateRouteIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        self.route.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("also resolved from {}", self.existing_file_path))
    }
}

impl Report for MalformedSegmentIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        self.route.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(self.reason.to_string())
    }
}

impl Report for IndexSuffixIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        self.route.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("trailing `index` trimmed from `{}`", self.stem))
    }

    fn hint(&self) -> Option<&str> {
        Some("rename the file or move it to <name>/index")
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.file_path()
            .cmp(other.file_path())
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
