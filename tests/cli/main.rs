use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod check;
mod init;
mod list;

const BIN_NAME: &str = "astro-routes";

/// Temporary Astro-like project driven through the built binary.
pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stops config discovery at the project root.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_pages(pages: &[(&str, &str)]) -> Result<Self> {
        let test = Self::new()?;
        for (path, content) in pages {
            test.write_page(path, content)?;
        }
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    /// Write a file under `src/pages`.
    pub fn write_page(&self, path: &str, content: &str) -> Result<()> {
        self.write_file(&format!("src/pages/{}", path), content)
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn list_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("list");
        cmd
    }

    pub fn check_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("check");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

/// Captured output of one command run.
pub struct RunResult {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

pub fn run(mut cmd: Command) -> Result<RunResult> {
    let Output {
        status,
        stdout,
        stderr,
    } = cmd.output().context("Failed to run command")?;
    Ok(RunResult {
        code: status.code(),
        stdout: String::from_utf8(stdout)?,
        stderr: String::from_utf8(stderr)?,
    })
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let result = run(test.command())?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("Usage:"));
    assert!(result.stdout.contains("list"));
    assert!(result.stdout.contains("check"));

    Ok(())
}
