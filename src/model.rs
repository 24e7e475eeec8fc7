//! Extracted model: entities with their fields, services with their methods
//!
//! Every value here is built once by an extractor and never mutated
//! afterwards. Rendering lives in [`crate::render`].

use heck::ToSnakeCase;

/// One exported field of an entity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    pub name: String,
    /// Canonical type name with pointer/slice modifiers stripped
    pub ty: String,
    pub is_pointer: bool,
    pub is_slice: bool,
}

impl Field {
    /// Snake-case wire name, e.g. `CreatedAt` becomes `created_at`
    pub fn json_name(&self) -> String {
        self.name.to_snake_case()
    }
}

/// A struct declaration reduced to its exported fields
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entity {
    pub name: String,
    pub fields: Vec<Field>,
}

impl Entity {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// One parameter declaration of a service method
///
/// A grouped declaration such as `a, b int` is a single parameter with two
/// names. Unnamed parameters (`context.Context`) have no names at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    pub names: Vec<String>,
    pub ty: String,
    pub is_pointer: bool,
    pub is_slice: bool,
}

impl Parameter {
    /// Grouped names joined with `", "`; empty for an unnamed parameter
    pub fn name(&self) -> String {
        self.names.join(", ")
    }
}

/// An exported method of a service interface
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Method {
    pub name: String,
    pub params: Vec<Parameter>,
    /// Result types with their modifiers, e.g. `*Order`, `[]string`, `error`
    pub return_vals: Vec<String>,
    /// Whether the last result is `error`
    pub return_error: bool,
}

impl Method {
    pub fn return_count(&self) -> usize {
        self.return_vals.len()
    }
}

/// A server interface reduced to its exported methods
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Service {
    pub name: String,
    pub methods: Vec<Method>,
}

impl Service {
    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == name)
    }
}
