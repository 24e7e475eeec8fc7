//! Declaration walker: parse one file, feed each type declaration to an extractor

use std::path::Path;

use tracing::{debug, info};

use super::DeclarationExtractor;
use crate::error::{ErrorContext, ExtractError, ExtractResult, ParseError, ParseResult};
use crate::parsing::GoParser;

/// Walks the top-level type declarations of Go sources
pub struct DeclarationWalker {
    parser: GoParser,
}

impl DeclarationWalker {
    pub fn new() -> ParseResult<Self> {
        Ok(Self {
            parser: GoParser::new()?,
        })
    }

    /// Walk in-memory Go source
    ///
    /// Results are collected in declaration order; declarations the
    /// extractor does not apply to are left out.
    pub fn walk_source<E: DeclarationExtractor>(
        &mut self,
        code: &str,
        extractor: &E,
    ) -> ParseResult<Vec<E::Output>> {
        let decls = self.parser.parse(code)?;
        let total = decls.len();

        let outputs: Vec<_> = decls
            .iter()
            .filter_map(|decl| extractor.extract(decl))
            .collect();

        debug!(
            declarations = total,
            extracted = outputs.len(),
            "walked type declarations"
        );
        Ok(outputs)
    }

    /// Read and walk a Go source file
    pub fn walk_file<E: DeclarationExtractor>(
        &mut self,
        path: &Path,
        extractor: &E,
    ) -> ExtractResult<Vec<E::Output>> {
        let code = read_source(path)?;
        let outputs = self.walk_source(&code, extractor).with_path(path)?;

        info!(path = %path.display(), extracted = outputs.len(), "extracted declarations");
        Ok(outputs)
    }
}

/// Read a source file as UTF-8
fn read_source(path: &Path) -> ExtractResult<String> {
    let bytes = std::fs::read(path).map_err(|source| ExtractError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    String::from_utf8(bytes)
        .map_err(|_| ParseError::InvalidUtf8)
        .with_path(path)
}
