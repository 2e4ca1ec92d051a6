use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_check_clean_project() -> Result<()> {
    let test = CliTest::with_pages(&[
        ("index.astro", "<h1>Home</h1>"),
        ("blog/[slug].md", "# Post"),
    ])?;

    let result = run(test.check_command())?;

    assert_eq!(result.code, Some(0));
    assert_eq!(result.stdout, "✓ Checked 2 routes - no issues found\n");

    Ok(())
}

#[test]
fn test_check_duplicate_route() -> Result<()> {
    let test = CliTest::with_pages(&[
        ("blog.astro", "<h1>Blog</h1>"),
        ("blog/index.md", "# Blog"),
    ])?;

    let result = run(test.check_command())?;

    assert_eq!(result.code, Some(1));
    assert_eq!(
        result.stdout,
        "\
error: \"/blog\"  duplicate-route
  --> src/pages/blog/index.md
  = note: also resolved from src/pages/blog.astro

✘ 1 problem (1 error, 0 warnings)
"
    );

    Ok(())
}

#[test]
fn test_check_warnings_exit_zero() -> Result<()> {
    let test = CliTest::with_pages(&[
        ("reindex.astro", "<h1>Reindex</h1>"),
        ("[id.astro", "<h1>Broken</h1>"),
    ])?;

    let result = run(test.check_command())?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("warning: \"/[id\"  malformed-segment"));
    assert!(result.stdout.contains("= note: unbalanced brackets"));
    assert!(result.stdout.contains("warning: \"/re\"  index-suffix"));
    assert!(result.stdout.contains("2 problems (0 errors, 2 warnings)"));

    Ok(())
}

#[test]
fn test_check_selected_rules() -> Result<()> {
    let test = CliTest::with_pages(&[
        ("blog.astro", "<h1>Blog</h1>"),
        ("blog/index.md", "# Blog"),
        ("reindex.astro", "<h1>Reindex</h1>"),
    ])?;

    let result = run({
        let mut cmd = test.check_command();
        cmd.arg("index-suffix");
        cmd
    })?;

    assert_eq!(result.code, Some(0));
    assert!(!result.stdout.contains("duplicate-route"));
    assert!(result.stdout.contains("index-suffix"));

    Ok(())
}

#[test]
fn test_check_invalid_config() -> Result<()> {
    let test = CliTest::with_pages(&[("index.astro", "<h1>Home</h1>")])?;
    test.write_file(".routesrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let result = run(test.check_command())?;

    assert_eq!(result.code, Some(2));
    assert!(result.stderr.contains("Invalid glob pattern"));

    Ok(())
}
