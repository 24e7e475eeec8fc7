//! Owned declaration tree lowered from the tree-sitter Go syntax tree
//!
//! The extractors never touch tree-sitter nodes directly. The walker lowers
//! every top-level `type_spec` into a [`TypeDecl`] and hands that over, so the
//! extraction rules can be exercised with hand-built values.

/// A type expression, reduced to the shapes the resolver distinguishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// Plain identifier such as `string` or `Order`
    Named(String),
    /// Package-qualified type such as `timestamppb.Timestamp`
    Qualified { base: Box<TypeExpr>, name: String },
    /// `*T`
    Pointer(Box<TypeExpr>),
    /// `[]T` and `[N]T`
    Slice(Box<TypeExpr>),
    /// `...T` in the last position of a parameter list
    Variadic(Box<TypeExpr>),
    /// `(T)`
    Parenthesized(Box<TypeExpr>),
    /// Any other shape; carries the grammar node kind for diagnostics
    Unsupported(String),
}

impl TypeExpr {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn qualified(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Qualified {
            base: Box::new(Self::Named(package.into())),
            name: name.into(),
        }
    }

    pub fn pointer(inner: TypeExpr) -> Self {
        Self::Pointer(Box::new(inner))
    }

    pub fn slice(element: TypeExpr) -> Self {
        Self::Slice(Box::new(element))
    }

    pub fn variadic(element: TypeExpr) -> Self {
        Self::Variadic(Box::new(element))
    }
}

/// One `type_spec` inside a top-level `type` declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub name: String,
    pub body: TypeBody,
}

/// The underlying shape of a declared type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeBody {
    Struct(Vec<FieldDecl>),
    Interface(Vec<InterfaceElem>),
    /// Aliases, named scalars, function types and the rest
    Other(String),
}

impl TypeBody {
    pub fn kind_name(&self) -> &str {
        match self {
            TypeBody::Struct(_) => "struct",
            TypeBody::Interface(_) => "interface",
            TypeBody::Other(kind) => kind,
        }
    }
}

/// One line of a struct body. Embedded fields have no names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub names: Vec<String>,
    pub ty: TypeExpr,
}

/// Member of an interface body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterfaceElem {
    Method(MethodSpec),
    /// Embedded interface or type-set term
    Embedded(String),
}

/// A method element. `signature` is `None` when the grammar recovered a
/// method name without a parameter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSpec {
    pub name: String,
    pub signature: Option<Signature>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Signature {
    pub params: Vec<ParamDecl>,
    pub results: Vec<ParamDecl>,
}

/// One parameter declaration; `a, b int` is a single `ParamDecl` with two names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDecl {
    pub names: Vec<String>,
    pub ty: TypeExpr,
}

impl ParamDecl {
    pub fn unnamed(ty: TypeExpr) -> Self {
        Self {
            names: Vec::new(),
            ty,
        }
    }

    pub fn named<I, S>(names: I, ty: TypeExpr) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            ty,
        }
    }
}
