use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    core::{BuildOutput, ResolvedRoute},
    issues::{Issue, Report},
};

// ============================================================
// Config Types (get_config)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path to the Astro project root
    pub project_root_path: String,
}

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub build_output: BuildOutput,
    pub ignores: Vec<String>,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            build_output: c.build_output,
            ignores: c.ignores,
        }
    }
}

// ============================================================
// Route Types (resolve_routes)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolveRoutesParams {
    /// Absolute path to the Astro project root
    pub project_root_path: String,
    /// Build output mode (overrides config file)
    pub build_output: Option<BuildOutput>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolveRoutesResult {
    pub build_output: BuildOutput,
    pub total_count: usize,
    pub routes: Vec<ResolvedRoute>,
}

// ============================================================
// Check Types (check_routes)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckRoutesParams {
    /// Absolute path to the Astro project root
    pub project_root_path: String,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckRoutesResult {
    pub total_count: usize,
    pub items: Vec<RouteIssueItem>,
}

/// One route issue
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteIssueItem {
    /// Rule name (e.g., "duplicate-route")
    pub rule: String,
    /// "error" or "warning"
    pub severity: String,
    /// Page file relative to the project root
    pub file_path: String,
    /// The route path the issue is about
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&Issue> for RouteIssueItem {
    fn from(issue: &Issue) -> Self {
        Self {
            rule: issue.rule().to_string(),
            severity: issue.severity().to_string(),
            file_path: issue.file_path().to_string(),
            message: issue.message(),
            details: issue.details(),
        }
    }
}
