//! Entity extraction from struct declarations

use tracing::debug;

use super::DeclarationExtractor;
use super::resolve::resolve_type;
use crate::model::{Entity, Field};
use crate::parsing::go::{TypeBody, TypeDecl, TypeExpr};
use crate::parsing::is_exported;

/// Build one field from its declared name and type expression
pub fn build_field(name: &str, ty: &TypeExpr) -> Field {
    let resolved = resolve_type(ty);
    Field {
        name: name.to_string(),
        ty: resolved.name,
        is_pointer: resolved.is_pointer,
        is_slice: resolved.is_slice,
    }
}

/// Turns struct declarations into [`Entity`] values
#[derive(Debug, Default, Clone, Copy)]
pub struct EntityExtractor;

impl EntityExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl DeclarationExtractor for EntityExtractor {
    type Output = Entity;

    fn extract(&self, decl: &TypeDecl) -> Option<Entity> {
        let TypeBody::Struct(field_decls) = &decl.body else {
            debug!(
                name = %decl.name,
                kind = decl.body.kind_name(),
                "skipping non-struct declaration"
            );
            return None;
        };

        let mut fields = Vec::new();
        for field_decl in field_decls {
            if field_decl.names.is_empty() {
                debug!(entity = %decl.name, "skipping embedded field");
                continue;
            }
            for name in &field_decl.names {
                if !is_exported(name) {
                    debug!(entity = %decl.name, field = %name, "skipping unexported field");
                    continue;
                }
                fields.push(build_field(name, &field_decl.ty));
            }
        }

        Some(Entity {
            name: decl.name.clone(),
            fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::go::{FieldDecl, InterfaceElem};

    fn field_decl(names: &[&str], ty: TypeExpr) -> FieldDecl {
        FieldDecl {
            names: names.iter().map(|n| n.to_string()).collect(),
            ty,
        }
    }

    #[test]
    fn test_only_exported_fields_in_declaration_order() {
        let decl = TypeDecl {
            name: "Order".to_string(),
            body: TypeBody::Struct(vec![
                field_decl(&["state"], TypeExpr::qualified("protoimpl", "MessageState")),
                field_decl(&["ID"], TypeExpr::named("string")),
                field_decl(&["internalFlag"], TypeExpr::named("bool")),
                field_decl(&["Items"], TypeExpr::slice(TypeExpr::named("string"))),
                field_decl(&["Width", "height", "Depth"], TypeExpr::named("float64")),
            ]),
        };

        let entity = EntityExtractor::new().extract(&decl).expect("struct entity");
        let names: Vec<_> = entity.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["ID", "Items", "Width", "Depth"]);
        assert!(entity.field("Items").is_some_and(|f| f.is_slice));
        assert!(entity.field("internalFlag").is_none());
    }

    #[test]
    fn test_embedded_fields_are_skipped() {
        let decl = TypeDecl {
            name: "Wrapper".to_string(),
            body: TypeBody::Struct(vec![
                field_decl(&[], TypeExpr::named("Base")),
                field_decl(&["Name"], TypeExpr::named("string")),
            ]),
        };

        let entity = EntityExtractor::new().extract(&decl).expect("struct entity");
        assert_eq!(entity.fields.len(), 1);
        assert_eq!(entity.fields[0].name, "Name");
    }

    #[test]
    fn test_non_struct_declarations_are_not_applicable() {
        let extractor = EntityExtractor::new();
        let iface = TypeDecl {
            name: "OrderServiceServer".to_string(),
            body: TypeBody::Interface(vec![InterfaceElem::Embedded("Base".to_string())]),
        };
        let alias = TypeDecl {
            name: "Status".to_string(),
            body: TypeBody::Other("type_identifier".to_string()),
        };

        assert!(extractor.extract(&iface).is_none());
        assert!(extractor.extract(&alias).is_none());
    }

    #[test]
    fn test_empty_struct_yields_empty_entity() {
        let decl = TypeDecl {
            name: "UnimplementedOrderServiceServer".to_string(),
            body: TypeBody::Struct(Vec::new()),
        };

        let entity = EntityExtractor::new().extract(&decl).expect("struct entity");
        assert!(entity.fields.is_empty());
    }

    #[test]
    fn test_build_field_flags_follow_structure() {
        let tags = build_field(
            "Tags",
            &TypeExpr::slice(TypeExpr::pointer(TypeExpr::named("Tag"))),
        );
        assert_eq!(tags.ty, "Tag");
        assert!(tags.is_slice);
        assert!(tags.is_pointer);

        let owner = build_field("Owner", &TypeExpr::qualified("users", "User"));
        assert_eq!(owner.ty, "users.User");
        assert!(!owner.is_slice);
        assert!(!owner.is_pointer);

        let meta = build_field("Meta", &TypeExpr::Unsupported("map_type".to_string()));
        assert_eq!(meta.ty, "unknown");
    }
}
