use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context as _, Result};
use colored::Colorize;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        file_scanner::ScanOptions,
        pipeline::{resolve_routes_blocking, resolve_routes_with},
        search::FrontmatterDetector,
        types::{AstroConfig, BuildOutput, ResolvedRoute},
    },
};

/// Everything a command needs to resolve the routes of one project.
///
/// Built once per invocation from the config file plus command-line
/// overrides. Priority: CLI flag > config file > defaults.
#[derive(Debug, Clone)]
pub struct RouteContext {
    pub config: AstroConfig,
    pub scan_options: ScanOptions,
    /// True if a config file was found.
    pub from_file: bool,
}

impl RouteContext {
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let root = args.root.clone().unwrap_or_else(|| PathBuf::from("."));
        Self::from_root(&root, args.build_output, args.verbose)
    }

    pub fn from_root(
        root: &Path,
        build_output: Option<BuildOutput>,
        verbose: bool,
    ) -> Result<Self> {
        let root_dir = std::path::absolute(root)
            .with_context(|| format!("Invalid root directory: {}", root.display()))?;
        let loaded = load_config(&root_dir)?;

        if !loaded.from_file && verbose {
            eprintln!(
                "{} No {} found, using default configuration",
                "Note:".bold(),
                CONFIG_FILE_NAME
            );
        }

        Ok(Self::from_config(
            root_dir,
            loaded.config,
            build_output,
            loaded.from_file,
            verbose,
        ))
    }

    fn from_config(
        root_dir: PathBuf,
        config: Config,
        build_output: Option<BuildOutput>,
        from_file: bool,
        verbose: bool,
    ) -> Self {
        Self {
            config: AstroConfig::new(root_dir, build_output.unwrap_or(config.build_output)),
            scan_options: ScanOptions {
                ignores: config.ignores,
                verbose,
            },
            from_file,
        }
    }

    pub fn build_output(&self) -> BuildOutput {
        self.config.build_output
    }

    /// Resolve routes from synchronous code. Must not be called from inside
    /// a tokio runtime.
    pub fn resolve(&self) -> Result<Vec<ResolvedRoute>> {
        resolve_routes_blocking(
            &self.config,
            &self.scan_options,
            Arc::new(FrontmatterDetector),
        )
    }

    pub async fn resolve_async(&self) -> Result<Vec<ResolvedRoute>> {
        resolve_routes_with(
            &self.config,
            &self.scan_options,
            Arc::new(FrontmatterDetector),
        )
        .await
    }
}
