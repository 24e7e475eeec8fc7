//! Test helpers for Go parser unit tests
//!
//! This module provides utilities for creating test data, assertions, and common
//! test patterns used across parser and extractor tests.

use thiserror::Error;

use super::parser::GoParser;
use super::syntax::TypeDecl;

/// Errors specific to Go parser testing
#[derive(Error, Debug)]
pub enum GoTestError {
    #[error(
        "Parser initialization failed: {0}\nSuggestion: Check that tree-sitter-go is properly configured"
    )]
    InitializationFailed(String),

    #[error(
        "Declaration extraction failed: {0}\nSuggestion: Verify the Go snippet is valid and contains the expected types"
    )]
    ExtractionFailed(String),

    #[error(
        "Test assertion failed: {0}\nSuggestion: Check test expectations against actual parser output"
    )]
    AssertionFailed(String),
}

/// Test fixture builder for creating Go code samples
#[derive(Debug, Default)]
pub struct GoCodeBuilder {
    package: Option<String>,
    imports: Vec<String>,
    types: Vec<String>,
    functions: Vec<String>,
}

impl GoCodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn with_import(mut self, import: impl Into<String>) -> Self {
        self.imports.push(import.into());
        self
    }

    pub fn with_type(mut self, type_decl: impl Into<String>) -> Self {
        self.types.push(type_decl.into());
        self
    }

    pub fn with_function(mut self, func_decl: impl Into<String>) -> Self {
        self.functions.push(func_decl.into());
        self
    }

    #[must_use = "Building the Go code may produce an incomplete result"]
    pub fn build(self) -> String {
        let mut code = String::new();

        if let Some(package) = self.package {
            code.push_str(&format!("package {package}\n\n"));
        }

        if !self.imports.is_empty() {
            if self.imports.len() == 1 {
                code.push_str(&format!("import {}\n\n", self.imports[0]));
            } else {
                code.push_str("import (\n");
                for import in &self.imports {
                    code.push_str(&format!("    {import}\n"));
                }
                code.push_str(")\n\n");
            }
        }

        for type_decl in &self.types {
            code.push_str(&format!("{type_decl}\n\n"));
        }

        for func_decl in &self.functions {
            code.push_str(&format!("{func_decl}\n\n"));
        }

        code
    }
}

/// Helper function to parse Go code and lower its type declarations
pub fn parse_go_code(code: &str) -> Result<Vec<TypeDecl>, GoTestError> {
    let mut parser = GoParser::new().map_err(|e| {
        GoTestError::InitializationFailed(format!("Failed to create parser: {e}"))
    })?;

    parser
        .parse(code)
        .map_err(|e| GoTestError::ExtractionFailed(e.to_string()))
}

/// Find a lowered declaration by name
pub fn find_decl<'a>(decls: &'a [TypeDecl], name: &str) -> Result<&'a TypeDecl, GoTestError> {
    decls
        .iter()
        .find(|d| d.name == name)
        .ok_or_else(|| GoTestError::AssertionFailed(format!("Declaration '{name}' not found")))
}
