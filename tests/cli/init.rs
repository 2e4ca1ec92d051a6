use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let result = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(result.code, Some(0));
    assert_eq!(result.stdout, "✓ Created .routesrc.json\n");

    let content = test.read_file(".routesrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["buildOutput"], "static");
    assert!(parsed["ignores"].as_array().is_some_and(|a| a.is_empty()));

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".routesrc.json", "{}")?;

    let result = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(result.code, Some(1));
    assert!(result.stderr.contains(".routesrc.json already exists"));
    assert_eq!(test.read_file(".routesrc.json")?, "{}");

    Ok(())
}
