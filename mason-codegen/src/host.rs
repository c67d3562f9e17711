//! The boundary a host implements.
//!
//! A host owns the real syntax tree. The driver reads it through
//! [`ClassView`] and mutates it only through [`WorkingCopy`]: members are
//! added to a detached copy of a declaration, the copy is queued as a
//! rewrite of the original, and all rewrites land together on
//! [`commit`](WorkingCopy::commit).

use mason_ir::{DeclKind, TypeParamName};
use thiserror::Error;

use crate::builder::{ClassSpec, MethodSpec};

/// A declared member, as far as the generator needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberInfo {
    Field {
        name: String,
        /// Declared type as written.
        ty: String,
        is_static: bool,
    },
    Method {
        name: String,
        param_count: usize,
        is_static: bool,
    },
    /// Includes the compiler-supplied default constructor, if any.
    Constructor { param_count: usize },
    /// A nested type declaration.
    Type { name: String },
}

/// Read-only view of a resolved top-level declaration.
pub trait ClassView {
    fn kind(&self) -> DeclKind;

    /// Simple (unqualified) name.
    fn simple_name(&self) -> &str;

    /// Declared type parameters, in order.
    fn type_parameters(&self) -> Vec<TypeParamName>;

    /// Declared members, in order.
    fn members(&self) -> Vec<MemberInfo>;

    /// True if the no-argument constructor was supplied by the compiler
    /// rather than written by hand.
    fn has_synthetic_constructor(&self) -> bool;
}

/// A member produced by synthesis, for the host to translate into its own nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum SynthesizedMember {
    /// A method or constructor.
    Method(MethodSpec),
    /// The nested builder type.
    Builder(ClassSpec),
}

/// Errors raised by a host.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("failed to resolve compilation unit: {0}")]
    Resolve(String),

    #[error("rewrite targets a declaration that is not in the unit: `{0}`")]
    StaleRewrite(String),

    #[error("failed to commit changes: {message}")]
    Commit {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl HostError {
    pub fn commit(message: impl Into<String>) -> Self {
        Self::Commit {
            message: message.into(),
            source: None,
        }
    }

    pub fn commit_with(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Commit {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

/// A mutable session over one compilation unit.
pub trait WorkingCopy {
    /// Declaration handle handed out by [`type_decls`](Self::type_decls).
    type Decl: ClassView;
    /// What a successful commit yields.
    type Committed;

    /// Resolve the unit and return its top-level declarations, in order.
    fn type_decls(&mut self) -> Result<Vec<Self::Decl>, HostError>;

    /// Return a copy of `decl` with `member` appended after its existing members.
    fn add_class_member(&self, decl: &Self::Decl, member: SynthesizedMember) -> Self::Decl;

    /// Queue replacing `original` with `modified`.
    fn rewrite(&mut self, original: &Self::Decl, modified: Self::Decl) -> Result<(), HostError>;

    /// Apply every queued rewrite, or none of them.
    fn commit(self) -> Result<Self::Committed, HostError>;
}
