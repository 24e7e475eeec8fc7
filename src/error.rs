//! Error types for the extraction pipeline
//!
//! This module provides structured error types using thiserror. Only two
//! situations are errors at all: a file that cannot be read and a file that
//! is not valid Go. Everything the extractors decline to model is skipped
//! silently and never surfaces here.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for extraction runs
#[derive(Error, Debug)]
pub enum ExtractError {
    /// File system errors
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Parsing errors
    #[error("Failed to parse Go file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// Configuration errors
    #[error("Invalid configuration: {reason}")]
    ConfigError { reason: String },

    /// General errors for cases where we need to preserve existing behavior
    #[error("{0}")]
    General(String),
}

impl ExtractError {
    /// Get a stable status code for this error type.
    pub fn status_code(&self) -> String {
        match self {
            Self::FileRead { .. } => "FILE_READ_ERROR",
            Self::FileWrite { .. } => "FILE_WRITE_ERROR",
            Self::Parse { .. } => "PARSE_ERROR",
            Self::ConfigError { .. } => "CONFIG_ERROR",
            Self::General(_) => "GENERAL_ERROR",
        }
        .to_string()
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            Self::FileRead { .. } => vec![
                "Check that the file exists and you have read permissions",
                "Ensure the path points at a generated .pb.go or _grpc.pb.go file",
            ],
            Self::FileWrite { .. } => vec![
                "Check that the directory exists and is writable",
                "Use 'eextract init --force' to overwrite an existing configuration",
            ],
            Self::Parse { .. } => vec![
                "Run 'gofmt -l <file>' to locate the syntax error",
                "Regenerate the file with protoc if it was edited by hand",
                "Use --keep-going to extract the other file anyway",
            ],
            Self::ConfigError { .. } => vec![
                "Run 'eextract config' to inspect the effective settings",
                "Run 'eextract init --force' to regenerate the configuration file",
            ],
            Self::General(_) => vec![],
        }
    }
}

/// Errors specific to parsing operations
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to initialize {language} parser: {reason}")]
    ParserInit { language: String, reason: String },

    #[error("Failed to parse code at line {line}, column {column}: {reason}")]
    SyntaxError {
        line: u32,
        column: u32,
        reason: String,
    },

    #[error("Parser produced no syntax tree")]
    NoTree,

    #[error("Invalid UTF-8 in source file")]
    InvalidUtf8,
}

/// Result type alias for extraction runs
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Result type alias for parse operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Helper trait for attaching a source path to parse failures
pub trait ErrorContext<T> {
    /// Attach the path of the file being parsed
    fn with_path(self, path: &std::path::Path) -> ExtractResult<T>;
}

impl<T> ErrorContext<T> for ParseResult<T> {
    fn with_path(self, path: &std::path::Path) -> ExtractResult<T> {
        self.map_err(|source| ExtractError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
