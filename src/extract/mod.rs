//! Extraction of entities and services from Go type declarations
//!
//! The walker parses a file and hands every top-level type declaration to a
//! [`DeclarationExtractor`]. Extractors are selective: a declaration they do
//! not apply to yields `None` and is dropped without error.

pub mod entity;
pub mod resolve;
pub mod service;
pub mod walker;

use std::path::Path;

use crate::error::{ErrorContext, ExtractResult};
use crate::model::{Entity, Service};
use crate::parsing::TypeDecl;

pub use entity::{EntityExtractor, build_field};
pub use resolve::{ResolvedType, UNKNOWN_TYPE, resolve, resolve_type};
pub use service::{ServiceExtractor, ServiceFilter, build_method};
pub use walker::DeclarationWalker;

/// Per-declaration extraction step driven by [`DeclarationWalker`]
pub trait DeclarationExtractor {
    type Output;

    /// Model `decl`, or `None` when the declaration is not applicable
    fn extract(&self, decl: &TypeDecl) -> Option<Self::Output>;
}

/// Extract every struct declared in the Go file at `path`
pub fn find_entities(path: impl AsRef<Path>) -> ExtractResult<Vec<Entity>> {
    let path = path.as_ref();
    let mut walker = DeclarationWalker::new().with_path(path)?;
    walker.walk_file(path, &EntityExtractor::new())
}

/// Extract every server interface declared in the Go file at `path`
pub fn find_services(
    path: impl AsRef<Path>,
    filter: &ServiceFilter,
) -> ExtractResult<Vec<Service>> {
    let path = path.as_ref();
    let mut walker = DeclarationWalker::new().with_path(path)?;
    walker.walk_file(path, &ServiceExtractor::new(filter.clone()))
}
