use std::sync::Arc;

use anyhow::{Result, anyhow};
use swc_common::{FileName, GLOBALS, Globals, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

/// Parse a TypeScript source string into a module AST.
///
/// Used for `.astro` frontmatter, which is plain TypeScript (no JSX). Only
/// fatal parse errors are reported; recoverable ones such as a top-level
/// `return` are accepted, matching what the host compiler allows.
pub fn parse_ts_source(code: String, file_path: &str) -> Result<Module> {
    let source_map: Arc<SourceMap> = Arc::default();

    // Wrap in GLOBALS.set() for thread safety
    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: false,
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse frontmatter of {}: {:?}", file_path, e))
    })
}
