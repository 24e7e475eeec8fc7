//! Service extraction from gRPC server interfaces
//!
//! protoc-gen-go-grpc emits several interfaces per service: the client
//! (`FooClient`), the server (`FooServer`) and a forward-compatibility
//! placeholder (`UnsafeFooServer`). Only the server interface describes the
//! service, so declarations are selected by name through [`ServiceFilter`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::DeclarationExtractor;
use super::resolve::{ResolvedType, resolve_type};
use crate::model::{Method, Parameter, Service};
use crate::parsing::go::{InterfaceElem, MethodSpec, TypeBody, TypeDecl};
use crate::parsing::is_exported;

/// Canonical name of Go's error interface
const ERROR_TYPE: &str = "error";

/// Naming-convention predicate for server interfaces
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceFilter {
    /// Substring a service name must contain
    #[serde(default = "default_server_marker")]
    pub server_marker: String,

    /// Substring a service name must not contain
    #[serde(default = "default_unsafe_marker")]
    pub unsafe_marker: String,
}

fn default_server_marker() -> String {
    "Server".to_string()
}
fn default_unsafe_marker() -> String {
    "Unsafe".to_string()
}

impl Default for ServiceFilter {
    fn default() -> Self {
        Self {
            server_marker: default_server_marker(),
            unsafe_marker: default_unsafe_marker(),
        }
    }
}

impl ServiceFilter {
    pub fn new(server_marker: impl Into<String>, unsafe_marker: impl Into<String>) -> Self {
        Self {
            server_marker: server_marker.into(),
            unsafe_marker: unsafe_marker.into(),
        }
    }

    /// Whether an interface called `name` is a service server
    ///
    /// An empty unsafe marker excludes nothing.
    pub fn accepts(&self, name: &str) -> bool {
        name.contains(&self.server_marker)
            && (self.unsafe_marker.is_empty() || !name.contains(&self.unsafe_marker))
    }
}

/// Build a method from an interface method element
///
/// Returns `None` when the element has no parameter list to model.
pub fn build_method(spec: &MethodSpec) -> Option<Method> {
    let signature = spec.signature.as_ref()?;

    let params = signature
        .params
        .iter()
        .map(|param| {
            let ResolvedType {
                name,
                is_pointer,
                is_slice,
            } = resolve_type(&param.ty);
            Parameter {
                names: param.names.clone(),
                ty: name,
                is_pointer,
                is_slice,
            }
        })
        .collect();

    let mut return_vals = Vec::new();
    let mut last_result = None;
    for result in &signature.results {
        let resolved = resolve_type(&result.ty);
        // `(a, b int)` declares two results
        for _ in 0..result.names.len().max(1) {
            return_vals.push(resolved.to_string());
        }
        last_result = Some(resolved);
    }

    let return_error = last_result.is_some_and(|r| {
        r.name == ERROR_TYPE && !r.is_pointer && !r.is_slice
    });

    Some(Method {
        name: spec.name.clone(),
        params,
        return_vals,
        return_error,
    })
}

/// Turns server interfaces into [`Service`] values
#[derive(Debug, Default, Clone)]
pub struct ServiceExtractor {
    filter: ServiceFilter,
}

impl ServiceExtractor {
    pub fn new(filter: ServiceFilter) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> &ServiceFilter {
        &self.filter
    }
}

impl DeclarationExtractor for ServiceExtractor {
    type Output = Service;

    fn extract(&self, decl: &TypeDecl) -> Option<Service> {
        let TypeBody::Interface(elems) = &decl.body else {
            debug!(
                name = %decl.name,
                kind = decl.body.kind_name(),
                "skipping non-interface declaration"
            );
            return None;
        };

        if !self.filter.accepts(&decl.name) {
            debug!(name = %decl.name, "interface name is not a service server");
            return None;
        }

        let mut methods = Vec::new();
        for elem in elems {
            let spec = match elem {
                InterfaceElem::Method(spec) => spec,
                InterfaceElem::Embedded(embedded) => {
                    debug!(service = %decl.name, %embedded, "skipping embedded interface element");
                    continue;
                }
            };
            if !is_exported(&spec.name) {
                debug!(service = %decl.name, method = %spec.name, "skipping unexported method");
                continue;
            }
            match build_method(spec) {
                Some(method) => methods.push(method),
                None => {
                    debug!(service = %decl.name, method = %spec.name, "skipping method without signature");
                }
            }
        }

        Some(Service {
            name: decl.name.clone(),
            methods,
        })
    }
}
