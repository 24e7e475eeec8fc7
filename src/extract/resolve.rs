//! Type resolution shared by every extractor
//!
//! A [`TypeExpr`] is reduced to one canonical name. Pointer and slice
//! modifiers are reported through [`ResolvedType`] instead of being spelled
//! into the name.

use std::fmt;

use crate::parsing::TypeExpr;

/// Name returned for shapes the resolver does not model
pub const UNKNOWN_TYPE: &str = "unknown";

/// Package of the generated protobuf timestamp wrapper
const TIMESTAMP_PACKAGE: &str = "timestamppb";
const TIMESTAMP_TYPE: &str = "Timestamp";
const DATE_TIME_TYPE: &str = "time.Time";

/// Canonical name of a type expression, modifiers stripped
pub fn resolve(expr: &TypeExpr) -> String {
    match expr {
        TypeExpr::Named(name) if name == TIMESTAMP_PACKAGE => DATE_TIME_TYPE.to_string(),
        TypeExpr::Named(name) => name.clone(),
        TypeExpr::Qualified { base, name }
            if name == TIMESTAMP_TYPE
                && matches!(base.as_ref(), TypeExpr::Named(pkg) if pkg == TIMESTAMP_PACKAGE) =>
        {
            DATE_TIME_TYPE.to_string()
        }
        TypeExpr::Qualified { base, name } => format!("{}.{name}", resolve(base)),
        TypeExpr::Pointer(inner)
        | TypeExpr::Slice(inner)
        | TypeExpr::Variadic(inner)
        | TypeExpr::Parenthesized(inner) => resolve(inner),
        TypeExpr::Unsupported(_) => UNKNOWN_TYPE.to_string(),
    }
}

/// A resolved type together with the modifiers read off its outer shape
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedType {
    pub name: String,
    pub is_pointer: bool,
    pub is_slice: bool,
}

/// Resolve `expr` and derive its pointer/slice flags
///
/// `is_slice` is set when the outermost shape is a slice or array;
/// `is_pointer` when it is a pointer, a slice of pointers (`[]*T`) or a
/// variadic pointer (`...*T`).
pub fn resolve_type(expr: &TypeExpr) -> ResolvedType {
    let (is_pointer, is_slice) = match expr {
        TypeExpr::Pointer(_) => (true, false),
        TypeExpr::Slice(element) => (matches!(element.as_ref(), TypeExpr::Pointer(_)), true),
        TypeExpr::Variadic(element) => (matches!(element.as_ref(), TypeExpr::Pointer(_)), false),
        _ => (false, false),
    };

    ResolvedType {
        name: resolve(expr),
        is_pointer,
        is_slice,
    }
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_slice {
            f.write_str("[]")?;
        }
        if self.is_pointer {
            f.write_str("*")?;
        }
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_and_qualified() {
        assert_eq!(resolve(&TypeExpr::named("string")), "string");
        assert_eq!(
            resolve(&TypeExpr::qualified("context", "Context")),
            "context.Context"
        );
    }

    #[test]
    fn test_timestamp_substitution() {
        assert_eq!(resolve(&TypeExpr::named("timestamppb")), "time.Time");
        assert_eq!(
            resolve(&TypeExpr::qualified("timestamppb", "Timestamp")),
            "time.Time"
        );

        let created_at = resolve_type(&TypeExpr::pointer(TypeExpr::qualified(
            "timestamppb",
            "Timestamp",
        )));
        assert_eq!(created_at.name, "time.Time");
        assert!(created_at.is_pointer);
        assert!(!created_at.is_slice);

        // Other types from the same package keep their qualified name
        assert_eq!(
            resolve(&TypeExpr::qualified("durationpb", "Duration")),
            "durationpb.Duration"
        );
    }

    #[test]
    fn test_qualified_base_is_resolved_recursively() {
        let nested = TypeExpr::Qualified {
            base: Box::new(TypeExpr::Parenthesized(Box::new(TypeExpr::named("pkg")))),
            name: "Type".to_string(),
        };
        assert_eq!(resolve(&nested), "pkg.Type");
    }

    #[test]
    fn test_slice_of_pointers_sets_both_flags() {
        let items = resolve_type(&TypeExpr::slice(TypeExpr::pointer(TypeExpr::named("Item"))));
        assert_eq!(items.name, "Item");
        assert!(items.is_slice);
        assert!(items.is_pointer);
        assert_eq!(items.to_string(), "[]*Item");
    }

    #[test]
    fn test_variadic_resolves_to_element() {
        let opts = resolve_type(&TypeExpr::variadic(TypeExpr::qualified(
            "grpc",
            "CallOption",
        )));
        assert_eq!(opts.name, "grpc.CallOption");
        assert!(!opts.is_slice);
        assert!(!opts.is_pointer);
    }

    #[test]
    fn test_variadic_pointer_keeps_pointer_flag() {
        let opts = resolve_type(&TypeExpr::variadic(TypeExpr::pointer(TypeExpr::named(
            "Option",
        ))));
        assert_eq!(opts.name, "Option");
        assert!(opts.is_pointer);
        assert!(!opts.is_slice);
        assert_eq!(opts.to_string(), "*Option");
    }

    #[test]
    fn test_unsupported_falls_back_to_unknown() {
        let map = resolve_type(&TypeExpr::Unsupported("map_type".to_string()));
        assert_eq!(map.name, UNKNOWN_TYPE);
        assert_eq!(
            resolve(&TypeExpr::slice(TypeExpr::Unsupported("map_type".to_string()))),
            UNKNOWN_TYPE
        );
    }

    #[test]
    fn test_nested_slices_report_outer_shape_only() {
        let grid = resolve_type(&TypeExpr::slice(TypeExpr::slice(TypeExpr::named("byte"))));
        assert_eq!(grid.name, "byte");
        assert!(grid.is_slice);
        assert!(!grid.is_pointer);
        assert_eq!(grid.to_string(), "[]byte");
    }
}
