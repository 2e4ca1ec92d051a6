use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

const SEARCH_PAGE: &str = r#"---
import { z } from "astro/zod";
export const searchSchema = z.object({ q: z.string() });
---
<h1>Search</h1>
"#;

fn site() -> Result<CliTest> {
    CliTest::with_pages(&[
        ("index.astro", "<h1>Home</h1>"),
        ("about.md", "# About"),
        ("blog/index.astro", "<h1>Blog</h1>"),
        ("blog/[slug].mdx", "# Post"),
        ("[lang]/docs/[...rest].astro", "<h1>Docs</h1>"),
        ("search.astro", SEARCH_PAGE),
        ("api/data.ts", "export const GET = () => {};"),
    ])
}

#[test]
fn test_list_static() -> Result<()> {
    let test = site()?;

    let result = run(test.list_command())?;

    assert_eq!(result.code, Some(0));
    assert_eq!(
        result.stdout,
        "\
ROUTE                   PARAMS         SEARCH  FILE
/                       -              -       src/pages/index.astro
/[lang]/docs/[...rest]  lang, ...rest  -       src/pages/[lang]/docs/[...rest].astro
/about                  -              -       src/pages/about.md
/blog                   -              -       src/pages/blog/index.astro
/blog/[slug]            slug           -       src/pages/blog/[slug].mdx
/search                 -              -       src/pages/search.astro

✓ Resolved 6 routes (static build)
"
    );

    Ok(())
}

#[test]
fn test_list_server_detects_search_schema() -> Result<()> {
    let test = site()?;

    let result = run({
        let mut cmd = test.list_command();
        cmd.args(["--build-output", "server"]);
        cmd
    })?;

    assert_eq!(result.code, Some(0));
    assert!(
        result
            .stdout
            .contains("/search                 -              yes     src/pages/search.astro")
    );
    assert!(result.stdout.contains("(server build)"));

    Ok(())
}

#[test]
fn test_list_build_output_from_env() -> Result<()> {
    let test = site()?;

    let result = run({
        let mut cmd = test.list_command();
        cmd.env("ASTRO_ROUTES_BUILD_OUTPUT", "server");
        cmd
    })?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("(server build)"));

    Ok(())
}

#[test]
fn test_list_json() -> Result<()> {
    let test = site()?;

    let result = run({
        let mut cmd = test.list_command();
        cmd.args(["--json", "--build-output", "server"]);
        cmd
    })?;

    assert_eq!(result.code, Some(0));
    let routes: Value = serde_json::from_str(&result.stdout)?;
    let routes = routes.as_array().expect("routes should be an array");
    assert_eq!(routes.len(), 6);

    let search = routes
        .iter()
        .find(|r| r["path"] == "/search")
        .expect("search route should exist");
    assert_eq!(search["hasSearchSchema"], true);
    assert!(search["params"].is_null());

    let docs = routes
        .iter()
        .find(|r| r["path"] == "/[lang]/docs/[...rest]")
        .expect("docs route should exist");
    assert_eq!(docs["params"], serde_json::json!(["lang", "...rest"]));
    assert!(
        docs["absolutePath"]
            .as_str()
            .unwrap()
            .starts_with(test.root().to_str().unwrap())
    );

    Ok(())
}

#[test]
fn test_list_uses_config_file() -> Result<()> {
    let test = site()?;
    test.write_file(
        ".routesrc.json",
        r#"{ "buildOutput": "server", "ignores": ["blog/**"] }"#,
    )?;

    let result = run(test.list_command())?;

    assert_eq!(result.code, Some(0));
    assert!(!result.stdout.contains("/blog"));
    assert!(result.stdout.contains("Resolved 4 routes (server build)"));

    Ok(())
}

#[test]
fn test_list_root_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("site/src/pages/index.astro", "<h1>Home</h1>")?;

    let result = run({
        let mut cmd = test.list_command();
        cmd.args(["--root", "site"]);
        cmd
    })?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("src/pages/index.astro"));
    assert!(result.stdout.contains("Resolved 1 route (static build)"));

    Ok(())
}

#[test]
fn test_list_empty_pages_dir() -> Result<()> {
    let test = CliTest::new()?;
    std::fs::create_dir_all(test.root().join("src/pages"))?;

    let result = run(test.list_command())?;

    assert_eq!(result.code, Some(0));
    assert_eq!(result.stdout, "✓ Resolved 0 routes (static build)\n");

    Ok(())
}

#[test]
fn test_list_missing_pages_dir() -> Result<()> {
    let test = CliTest::new()?;

    let result = run(test.list_command())?;

    assert_eq!(result.code, Some(2));
    assert!(result.stderr.contains("Pages directory not found"));

    Ok(())
}

#[test]
fn test_list_server_fails_on_broken_frontmatter() -> Result<()> {
    let test = site()?;
    test.write_page("broken.astro", "---\nexport const = ;\n---\n")?;

    let result = run({
        let mut cmd = test.list_command();
        cmd.args(["--build-output", "server"]);
        cmd
    })?;

    assert_eq!(result.code, Some(2));
    assert!(result.stderr.contains("broken.astro"));
    assert!(result.stdout.is_empty());

    Ok(())
}

#[test]
fn test_list_verbose_notes_missing_config() -> Result<()> {
    let test = site()?;

    let result = run({
        let mut cmd = test.list_command();
        cmd.arg("-v");
        cmd
    })?;

    assert_eq!(result.code, Some(0));
    assert!(
        result
            .stderr
            .contains("No .routesrc.json found, using default configuration")
    );

    Ok(())
}
