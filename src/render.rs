//! Declaration-style text rendering of the extracted model
//!
//! Rendering is pure: the same model and options always produce the same
//! text. `Display` on the model types uses [`RenderOptions::default`].

use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};

use crate::model::{Entity, Field, Method, Parameter, Service};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RenderOptions {
    /// Indentation of member lines
    #[serde(default = "default_indent")]
    pub indent: String,

    /// Append `json:"..."` tags to field lines
    #[serde(default)]
    pub json_tags: bool,
}

fn default_indent() -> String {
    "\t".to_string()
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            json_tags: false,
        }
    }
}

/// `[]` then `*` then the type name
fn write_type(out: &mut impl Write, ty: &str, is_pointer: bool, is_slice: bool) -> fmt::Result {
    if is_slice {
        out.write_str("[]")?;
    }
    if is_pointer {
        out.write_char('*')?;
    }
    out.write_str(ty)
}

fn write_field(out: &mut impl Write, field: &Field, options: &RenderOptions) -> fmt::Result {
    write!(out, "{} ", field.name)?;
    write_type(out, &field.ty, field.is_pointer, field.is_slice)?;
    if options.json_tags {
        write!(out, " `json:\"{}\"`", field.json_name())?;
    }
    Ok(())
}

fn write_parameter(out: &mut impl Write, param: &Parameter) -> fmt::Result {
    if !param.names.is_empty() {
        write!(out, "{} ", param.name())?;
    }
    write_type(out, &param.ty, param.is_pointer, param.is_slice)
}

fn write_method(out: &mut impl Write, method: &Method) -> fmt::Result {
    out.write_str(&method.name)?;
    out.write_char('(')?;
    for (i, param) in method.params.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write_parameter(out, param)?;
    }
    out.write_char(')')?;

    match method.return_vals.as_slice() {
        [] => Ok(()),
        [single] => write!(out, " {single}"),
        many => write!(out, " ({})", many.join(", ")),
    }
}

/// Render one entity as a Go struct declaration
pub fn render_entity(entity: &Entity, options: &RenderOptions) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_entity(&mut out, entity, options);
    out
}

/// Render one service as a Go interface declaration
pub fn render_service(service: &Service, options: &RenderOptions) -> String {
    let mut out = String::new();
    let _ = write_service(&mut out, service, options);
    out
}

fn write_entity(out: &mut impl Write, entity: &Entity, options: &RenderOptions) -> fmt::Result {
    writeln!(out, "type {} struct {{", entity.name)?;
    for field in &entity.fields {
        out.write_str(&options.indent)?;
        write_field(out, field, options)?;
        out.write_char('\n')?;
    }
    out.write_char('}')
}

fn write_service(out: &mut impl Write, service: &Service, options: &RenderOptions) -> fmt::Result {
    writeln!(out, "type {} interface {{", service.name)?;
    for method in &service.methods {
        out.write_str(&options.indent)?;
        write_method(out, method)?;
        out.write_char('\n')?;
    }
    out.write_char('}')
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_field(f, self, &RenderOptions::default())
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_parameter(f, self)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_method(f, self)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entity(f, self, &RenderOptions::default())
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_service(f, self, &RenderOptions::default())
    }
}
