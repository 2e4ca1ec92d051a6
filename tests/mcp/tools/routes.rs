use astro_routes::mcp::{
    RoutesMcpServer,
    types::{CheckRoutesParams, ResolveRoutesParams},
};
use astro_routes::core::BuildOutput;
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{
    McpTestFixture, extract_tool_result_json, find_route, fixture_site, fixture_with_route_issues,
};

// ============================================================================
// resolve_routes tests
// ============================================================================

#[tokio::test]
async fn test_resolve_routes_static_default() {
    let fixture = fixture_site().unwrap();
    let server = RoutesMcpServer::new();

    let params = Parameters(ResolveRoutesParams {
        project_root_path: fixture.root(),
        build_output: None,
    });

    let result = server.resolve_routes(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["buildOutput"], "static");
    assert_eq!(json_result["totalCount"], 4);
    assert_eq!(find_route(&json_result, "/products")["hasSearchSchema"], false);
    assert_eq!(find_route(&json_result, "/blog/[slug]")["params"], json!(["slug"]));
    assert!(find_route(&json_result, "/")["params"].is_null());
}

#[tokio::test]
async fn test_resolve_routes_server_override() {
    let fixture = fixture_site().unwrap();
    let server = RoutesMcpServer::new();

    let params = Parameters(ResolveRoutesParams {
        project_root_path: fixture.root(),
        build_output: Some(BuildOutput::Server),
    });

    let result = server.resolve_routes(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["buildOutput"], "server");
    assert_eq!(find_route(&json_result, "/products")["hasSearchSchema"], true);
    assert_eq!(find_route(&json_result, "/about")["hasSearchSchema"], false);
}

#[tokio::test]
async fn test_resolve_routes_uses_config_build_output() {
    let fixture = fixture_site().unwrap();
    fixture
        .write_config(&json!({ "buildOutput": "server" }))
        .unwrap();
    let server = RoutesMcpServer::new();

    let params = Parameters(ResolveRoutesParams {
        project_root_path: fixture.root(),
        build_output: None,
    });

    let result = server.resolve_routes(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["buildOutput"], "server");
    assert_eq!(find_route(&json_result, "/products")["hasSearchSchema"], true);
}

#[tokio::test]
async fn test_resolve_routes_empty_project() {
    let fixture = McpTestFixture::new().unwrap();
    let server = RoutesMcpServer::new();

    let params = Parameters(ResolveRoutesParams {
        project_root_path: fixture.root(),
        build_output: None,
    });

    let result = server.resolve_routes(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 0);
    assert_eq!(json_result["routes"], json!([]));
}

#[tokio::test]
async fn test_resolve_routes_broken_page_fails() {
    let fixture = fixture_site().unwrap();
    fixture
        .write_page("broken.astro", "---\nexport const = ;\n---\n")
        .unwrap();
    let server = RoutesMcpServer::new();

    let params = Parameters(ResolveRoutesParams {
        project_root_path: fixture.root(),
        build_output: Some(BuildOutput::Server),
    });

    let result = server.resolve_routes(params).await;
    assert!(result.is_err());
}

// ============================================================================
// check_routes tests
// ============================================================================

#[tokio::test]
async fn test_check_routes_clean() {
    let fixture = fixture_site().unwrap();
    let server = RoutesMcpServer::new();

    let params = Parameters(CheckRoutesParams {
        project_root_path: fixture.root(),
    });

    let result = server.check_routes(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 0);
    assert_eq!(json_result["items"], json!([]));
}

#[tokio::test]
async fn test_check_routes_reports_all_rules() {
    let fixture = fixture_with_route_issues().unwrap();
    let server = RoutesMcpServer::new();

    let params = Parameters(CheckRoutesParams {
        project_root_path: fixture.root(),
    });

    let result = server.check_routes(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 3);
    assert_eq!(
        json_result["items"],
        json!([
            {
                "rule": "malformed-segment",
                "severity": "warning",
                "filePath": "src/pages/[id.astro",
                "message": "/[id",
                "details": "unbalanced brackets"
            },
            {
                "rule": "duplicate-route",
                "severity": "error",
                "filePath": "src/pages/blog/index.md",
                "message": "/blog",
                "details": "also resolved from src/pages/blog.astro"
            },
            {
                "rule": "index-suffix",
                "severity": "warning",
                "filePath": "src/pages/reindex.astro",
                "message": "/re",
                "details": "trailing `index` trimmed from `reindex`"
            }
        ])
    );
}
