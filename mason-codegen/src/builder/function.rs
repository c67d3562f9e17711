//! Method and constructor specifications.
//!
//! A [`MethodSpec`] fixes the *shape* of a synthesized member: its name,
//! modifiers, signature and body statements. Hosts turn the body into their
//! own syntax through a [`MethodRenderer`].

use mason_ir::TypeParamName;

use super::types::{Modifiers, TypeRef};

/// What a synthesized method is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodKind {
    /// Fluent per-field setter on the builder.
    Setter,
    /// Static `builder()` factory on the host class.
    Factory,
    /// Terminal `build()` on the builder.
    Build,
    /// Private host constructor that copies fields out of a builder.
    ConsumingConstructor,
    /// Public no-argument host constructor.
    EmptyConstructor,
}

impl MethodKind {
    /// Returns true for constructor kinds.
    pub fn is_constructor(&self) -> bool {
        matches!(self, Self::ConsumingConstructor | Self::EmptyConstructor)
    }
}

/// A declarative specification for a method or constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSpec {
    /// What this method is for.
    pub kind: MethodKind,
    /// Method name; for constructors, the declaring class name.
    pub name: String,
    /// Modifiers.
    pub modifiers: Modifiers,
    /// Method-level type parameters (`<T>` before the return type).
    pub type_params: Vec<TypeParamName>,
    /// Parameters.
    pub params: Vec<ParamSpec>,
    /// Return type (None for constructors).
    pub return_type: Option<TypeRef>,
    /// Body statements.
    pub body: Vec<Statement>,
}

impl MethodSpec {
    /// Create a public method of the given kind.
    pub fn new(kind: MethodKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            modifiers: Modifiers::public(),
            type_params: Vec::new(),
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    /// Set modifiers.
    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set method-level type parameters.
    pub fn type_params(mut self, params: &[TypeParamName]) -> Self {
        self.type_params = params.to_vec();
        self
    }

    /// Add a parameter.
    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    /// Set return type.
    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.return_type = Some(ty);
        self
    }

    /// Set the body statements.
    pub fn body(mut self, stmts: Vec<Statement>) -> Self {
        self.body = stmts;
        self
    }

    /// Check if this is a constructor.
    pub fn is_constructor(&self) -> bool {
        self.kind.is_constructor()
    }
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    pub name: String,
    pub ty: TypeRef,
}

impl ParamSpec {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// An expression inside a synthesized body.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// The current instance.
    This,
    /// A local name or parameter.
    Ident(String),
    /// Field access: `target.name`.
    Field { target: Box<Expr>, name: String },
    /// Instance creation: `new Type(args)`.
    New { ty: TypeRef, args: Vec<Expr> },
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    /// Access `name` on `target`.
    pub fn field(target: Expr, name: impl Into<String>) -> Self {
        Self::Field {
            target: Box::new(target),
            name: name.into(),
        }
    }

    /// Shorthand for `this.name`.
    pub fn this_field(name: impl Into<String>) -> Self {
        Self::field(Self::This, name)
    }

    pub fn new_instance(ty: TypeRef, args: Vec<Expr>) -> Self {
        Self::New { ty, args }
    }
}

/// A statement inside a synthesized body.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `target = value;`
    Assign { target: Expr, value: Expr },
    /// `return value;`
    Return(Expr),
}

impl Statement {
    pub fn assign(target: Expr, value: Expr) -> Self {
        Self::Assign { target, value }
    }

    pub fn return_(value: Expr) -> Self {
        Self::Return(value)
    }
}

/// Trait for rendering method bodies to language-specific code.
pub trait MethodRenderer {
    /// Render a statement, including its terminator.
    fn render_statement(&self, stmt: &Statement) -> String;

    /// Render an expression.
    fn render_expr(&self, expr: &Expr) -> String;

    /// Render every body statement, one line each.
    fn render_body(&self, spec: &MethodSpec) -> Vec<String> {
        spec.body
            .iter()
            .map(|stmt| self.render_statement(stmt))
            .collect()
    }
}
