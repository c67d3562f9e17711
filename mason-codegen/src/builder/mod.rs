//! Code generation building blocks.
//!
//! This module provides the core primitives for generating code:
//! - [`CodeBuilder`] - Fluent API for building indented code
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for types that can be converted to code fragments
//! - [`Indent`] - Indentation configuration
//!
//! # Declarative Member Specifications
//!
//! - [`MethodSpec`] - Methods and constructors, with body [`Statement`]s
//! - [`ClassSpec`], [`FieldDecl`] - Nested type definitions
//! - [`TypeRef`] - Type references, plain or parameterized
//! - [`MethodRenderer`] - Trait for language-specific statement rendering

mod code_builder;
mod function;
mod indent;
mod renderable;
mod structure;
mod types;

pub use code_builder::CodeBuilder;
pub use function::{Expr, MethodKind, MethodRenderer, MethodSpec, ParamSpec, Statement};
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
pub use structure::{ClassSpec, FieldDecl};
pub use types::{Modifiers, TypeRef, Visibility};
