//! Go parser implementation
//!
//! Uses tree-sitter-go crate’s LANGUAGE constant (converted via .into()).
//!
//! Note: This parser uses ABI-15 (upgraded from ABI-14).
//! When migrating or updating the parser, ensure compatibility with ABI-15 features.

use tree_sitter::{Node, Parser};

use super::syntax::{
    FieldDecl, InterfaceElem, MethodSpec, ParamDecl, Signature, TypeBody, TypeDecl, TypeExpr,
};
use crate::error::{ParseError, ParseResult};

/// Longest source excerpt quoted in a syntax error message
const MAX_SNIPPET_LEN: usize = 40;

/// Declarations allowed at file scope after the package clause
const TOP_LEVEL_KINDS: &[&str] = &[
    "import_declaration",
    "const_declaration",
    "var_declaration",
    "type_declaration",
    "function_declaration",
    "method_declaration",
];

/// Go language parser
pub struct GoParser {
    parser: Parser,
}

impl GoParser {
    /// Create a new Go parser
    pub fn new() -> ParseResult<Self> {
        let mut parser = Parser::new();
        let lang = tree_sitter_go::LANGUAGE;
        parser
            .set_language(&lang.into())
            .map_err(|e| ParseError::ParserInit {
                language: "Go".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { parser })
    }

    /// Parse Go source code and lower every top-level type declaration
    ///
    /// The whole file must be valid Go. The first error or missing node in
    /// the tree is reported as a [`ParseError::SyntaxError`] and nothing is
    /// returned for the rest of the file.
    ///
    /// Declarations are returned in source order, with grouped
    /// `type ( ... )` blocks flattened in place.
    pub fn parse(&mut self, code: &str) -> ParseResult<Vec<TypeDecl>> {
        let tree = self.parser.parse(code, None).ok_or(ParseError::NoTree)?;
        let root_node = tree.root_node();

        if root_node.has_error() {
            return Err(
                find_syntax_error(root_node, code).unwrap_or_else(|| ParseError::SyntaxError {
                    line: 1,
                    column: 1,
                    reason: "invalid Go source".to_string(),
                }),
            );
        }

        // The grammar accepts statements at file scope and an optional package clause
        check_file_scope(root_node, code)?;

        let mut decls = Vec::new();
        for child in root_node.children(&mut root_node.walk()) {
            if child.kind() == "type_declaration" {
                self.process_type_declaration(child, code, &mut decls);
            }
        }

        Ok(decls)
    }

    /// Process a Go type declaration (one spec, or a parenthesized group)
    fn process_type_declaration(&self, node: Node, code: &str, decls: &mut Vec<TypeDecl>) {
        for child in node.children(&mut node.walk()) {
            match child.kind() {
                "type_spec" => {
                    if let Some(decl) = self.process_type_spec(child, code) {
                        decls.push(decl);
                    }
                }
                "type_alias" => {
                    if let Some(name_node) = child.child_by_field_name("name") {
                        decls.push(TypeDecl {
                            name: code[name_node.byte_range()].to_string(),
                            body: TypeBody::Other("type_alias".to_string()),
                        });
                    }
                }
                _ => {}
            }
        }
    }

    /// Process a type_spec node (individual type definition)
    fn process_type_spec(&self, node: Node, code: &str) -> Option<TypeDecl> {
        let name_node = node.child_by_field_name("name")?;
        let name = code[name_node.byte_range()].to_string();
        let type_node = node.child_by_field_name("type")?;

        let body = match type_node.kind() {
            "struct_type" => TypeBody::Struct(self.extract_struct_fields(type_node, code)),
            "interface_type" => {
                TypeBody::Interface(self.extract_interface_elems(type_node, code))
            }
            other => TypeBody::Other(other.to_string()),
        };

        Some(TypeDecl { name, body })
    }

    /// Extract struct fields from a struct_type node
    fn extract_struct_fields(&self, struct_node: Node, code: &str) -> Vec<FieldDecl> {
        let mut fields = Vec::new();

        // Look for field_declaration_list
        for child in struct_node.children(&mut struct_node.walk()) {
            if child.kind() == "field_declaration_list" {
                for field_child in child.children(&mut child.walk()) {
                    if field_child.kind() == "field_declaration" {
                        fields.push(self.process_struct_field(field_child, code));
                    }
                }
            }
        }

        fields
    }

    /// Process a single struct field declaration
    fn process_struct_field(&self, field_node: Node, code: &str) -> FieldDecl {
        // field_declaration may have multiple field names for the same type
        // e.g., "Width, Height float64"; embedded fields have none
        let names = field_names(field_node, code);
        let ty = field_node
            .child_by_field_name("type")
            .map(|type_node| lower_type_expr(type_node, code))
            .unwrap_or_else(|| TypeExpr::Unsupported("field_declaration".to_string()));

        FieldDecl { names, ty }
    }

    /// Extract method and embedded elements from an interface_type node
    fn extract_interface_elems(&self, interface_node: Node, code: &str) -> Vec<InterfaceElem> {
        let mut elems = Vec::new();

        for child in interface_node.children(&mut interface_node.walk()) {
            match child.kind() {
                "method_elem" | "method_spec" => {
                    if let Some(method) = self.process_interface_method(child, code) {
                        elems.push(InterfaceElem::Method(method));
                    }
                }
                "type_elem" | "constraint_elem" => {
                    elems.push(InterfaceElem::Embedded(code[child.byte_range()].to_string()));
                }
                _ => {}
            }
        }

        elems
    }

    /// Process a single interface method element
    fn process_interface_method(&self, method_node: Node, code: &str) -> Option<MethodSpec> {
        let name = method_node
            .child_by_field_name("name")
            .or_else(|| {
                method_node
                    .children(&mut method_node.walk())
                    .find(|n| n.kind() == "field_identifier")
            })
            .map(|n| code[n.byte_range()].to_string())?;

        let signature = method_node
            .child_by_field_name("parameters")
            .map(|params| Signature {
                params: self.extract_parameters(params, code),
                results: method_node
                    .child_by_field_name("result")
                    .map(|result| self.extract_results(result, code))
                    .unwrap_or_default(),
            });

        Some(MethodSpec { name, signature })
    }

    /// Extract parameter declarations from a `parameter_list` node
    ///
    /// Includes both regular and variadic (`...`) parameter declarations.
    fn extract_parameters(&self, list_node: Node, code: &str) -> Vec<ParamDecl> {
        let mut params = Vec::new();

        for child in list_node.children(&mut list_node.walk()) {
            let Some(type_node) = child.child_by_field_name("type") else {
                continue;
            };
            let ty = match child.kind() {
                "parameter_declaration" => lower_type_expr(type_node, code),
                "variadic_parameter_declaration" => {
                    TypeExpr::variadic(lower_type_expr(type_node, code))
                }
                _ => continue,
            };
            params.push(ParamDecl {
                names: field_names(child, code),
                ty,
            });
        }

        params
    }

    /// Extract the result list of a method
    ///
    /// Go return type can be:
    /// - A single type (e.g., `error`, `*Order`, `[]string`)
    /// - A `parameter_list` for multiple or named returns (e.g., `(*Order, error)`)
    fn extract_results(&self, result_node: Node, code: &str) -> Vec<ParamDecl> {
        if result_node.kind() == "parameter_list" {
            self.extract_parameters(result_node, code)
        } else {
            vec![ParamDecl::unnamed(lower_type_expr(result_node, code))]
        }
    }
}

/// Collect the `name` children of a field or parameter declaration
fn field_names(node: Node, code: &str) -> Vec<String> {
    let mut cursor = node.walk();
    node.children_by_field_name("name", &mut cursor)
        .map(|n| code[n.byte_range()].to_string())
        .collect()
}

/// First named child that is not a comment
fn first_type_child<'tree>(node: Node<'tree>) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .find(|child| child.kind() != "comment")
}

/// Lower a Go type node into a [`TypeExpr`]
fn lower_type_expr(node: Node, code: &str) -> TypeExpr {
    let unsupported = || TypeExpr::Unsupported(node.kind().to_string());

    match node.kind() {
        "type_identifier" | "identifier" => TypeExpr::Named(code[node.byte_range()].to_string()),
        "qualified_type" => {
            // For qualified types like pkg.Type, keep both segments
            match (
                node.child_by_field_name("package"),
                node.child_by_field_name("name"),
            ) {
                (Some(package), Some(name)) => TypeExpr::Qualified {
                    base: Box::new(TypeExpr::Named(code[package.byte_range()].to_string())),
                    name: code[name.byte_range()].to_string(),
                },
                _ => unsupported(),
            }
        }
        "pointer_type" => first_type_child(node)
            .map(|inner| TypeExpr::pointer(lower_type_expr(inner, code)))
            .unwrap_or_else(unsupported),
        "array_type" | "slice_type" => node
            .child_by_field_name("element")
            .map(|element| TypeExpr::slice(lower_type_expr(element, code)))
            .unwrap_or_else(unsupported),
        "parenthesized_type" => first_type_child(node)
            .map(|inner| TypeExpr::Parenthesized(Box::new(lower_type_expr(inner, code))))
            .unwrap_or_else(unsupported),
        _ => unsupported(),
    }
}

/// Syntax error at the 1-based start position of `node`
fn syntax_error_at(node: Node, reason: String) -> ParseError {
    let position = node.start_position();
    ParseError::SyntaxError {
        line: position.row as u32 + 1,
        column: position.column as u32 + 1,
        reason,
    }
}

/// Require a leading package clause followed only by top-level declarations
fn check_file_scope(root: Node, code: &str) -> ParseResult<()> {
    let mut seen_package = false;

    for child in root.named_children(&mut root.walk()) {
        match child.kind() {
            "comment" => {}
            "package_clause" if !seen_package => seen_package = true,
            kind if seen_package && TOP_LEVEL_KINDS.contains(&kind) => {}
            _ if !seen_package => {
                return Err(syntax_error_at(
                    child,
                    format!(
                        "expected `package` clause, found `{}`",
                        snippet(&code[child.byte_range()])
                    ),
                ));
            }
            _ => {
                return Err(syntax_error_at(
                    child,
                    format!(
                        "non-declaration statement outside function body: `{}`",
                        snippet(&code[child.byte_range()])
                    ),
                ));
            }
        }
    }

    if seen_package {
        Ok(())
    } else {
        let end = root.end_position();
        Err(ParseError::SyntaxError {
            line: end.row as u32 + 1,
            column: end.column as u32 + 1,
            reason: "expected `package` clause, found end of input".to_string(),
        })
    }
}

/// Locate the first error or missing node below `node`
fn find_syntax_error(node: Node, code: &str) -> Option<ParseError> {
    if node.is_error() || node.is_missing() {
        let reason = if node.is_missing() {
            format!("missing `{}`", node.kind())
        } else {
            let snippet = snippet(&code[node.byte_range()]);
            if snippet.is_empty() {
                "unexpected end of input".to_string()
            } else {
                format!("unexpected `{snippet}`")
            }
        };

        return Some(syntax_error_at(node, reason));
    }

    if !node.has_error() {
        return None;
    }

    node.children(&mut node.walk())
        .find_map(|child| find_syntax_error(child, code))
}

/// First line of `text`, trimmed and capped at [`MAX_SNIPPET_LEN`] characters
fn snippet(text: &str) -> String {
    let line = text.lines().next().unwrap_or("").trim();
    if line.chars().count() > MAX_SNIPPET_LEN {
        let truncated: String = line.chars().take(MAX_SNIPPET_LEN).collect();
        format!("{truncated}...")
    } else {
        line.to_string()
    }
}
