use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    cli::{args::CheckRule, commands::check::run_checks},
    config::load_config,
    core::{BuildOutput, RouteContext},
};

use super::types::{
    CheckRoutesParams, CheckRoutesResult, ConfigDto, ConfigValues, GetConfigParams,
    ResolveRoutesParams, ResolveRoutesResult, RouteIssueItem,
};

#[derive(Clone)]
pub struct RoutesMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for RoutesMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl RoutesMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get project configuration
    #[tool(
        description = "Get the route configuration (.routesrc.json) of an Astro project, or the defaults if none exists."
    )]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let loaded = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {:#}", e), None))?;

        to_tool_result(&ConfigDto {
            from_file: loaded.from_file,
            config: ConfigValues::from(loaded.config),
        })
    }

    /// Resolve all page routes
    #[tool(
        description = "Resolve every page under src/pages into its route path, dynamic params and search-schema flag."
    )]
    pub async fn resolve_routes(
        &self,
        params: Parameters<ResolveRoutesParams>,
    ) -> Result<CallToolResult, McpError> {
        let ResolveRoutesParams {
            project_root_path,
            build_output,
        } = params.0;

        let ctx = context(&project_root_path, build_output)?;
        let routes = ctx.resolve_async().await.map_err(|e| {
            McpError::internal_error(format!("Route resolution failed: {:#}", e), None)
        })?;

        to_tool_result(&ResolveRoutesResult {
            build_output: ctx.build_output(),
            total_count: routes.len(),
            routes,
        })
    }

    /// Run route diagnostics
    #[tool(
        description = "Check routes for duplicate paths, malformed dynamic segments and file names whose trailing 'index' was trimmed."
    )]
    pub async fn check_routes(
        &self,
        params: Parameters<CheckRoutesParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = context(&params.0.project_root_path, None)?;
        let routes = ctx.resolve_async().await.map_err(|e| {
            McpError::internal_error(format!("Route resolution failed: {:#}", e), None)
        })?;

        let mut issues = run_checks(&routes, &ctx.config.root_dir, &CheckRule::all());
        issues.sort();
        let items: Vec<RouteIssueItem> = issues.iter().map(RouteIssueItem::from).collect();

        to_tool_result(&CheckRoutesResult {
            total_count: items.len(),
            items,
        })
    }
}

fn context(
    project_root_path: &str,
    build_output: Option<BuildOutput>,
) -> Result<RouteContext, McpError> {
    RouteContext::from_root(Path::new(project_root_path), build_output, false)
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {:#}", e), None))
}

fn to_tool_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_handler]
impl ServerHandler for RoutesMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "astro-routes MCP resolves the page routes of an Astro project.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. resolve_routes - List every route with its params and search-schema flag\n\
                 3. check_routes - Find duplicate routes, malformed segments and trimmed index names\n\n\
                 All tools take the absolute project root path. Search schemas are only\n\
                 detected when the build output is 'server'."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = RoutesMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
