//! Go language parser implementation
//!
//! Parses Go sources with tree-sitter-go and lowers the top-level `type`
//! declarations into the owned tree in [`syntax`]. Nothing below the type
//! level (function bodies, variables, imports) is lowered.
//!
//! ## Module Components
//!
//! - [`parser`]: Tree-sitter integration, syntax error reporting, lowering
//! - [`syntax`]: Owned declaration tree consumed by the extractors

pub mod parser;
pub mod syntax;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use parser::GoParser;
pub use syntax::{
    FieldDecl, InterfaceElem, MethodSpec, ParamDecl, Signature, TypeBody, TypeDecl, TypeExpr,
};
