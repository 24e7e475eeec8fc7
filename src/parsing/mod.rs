pub mod go;
pub mod visibility;

pub use go::{GoParser, TypeDecl, TypeExpr};
pub use visibility::{Visibility, go_visibility, is_exported};
