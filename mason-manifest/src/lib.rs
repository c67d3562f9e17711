//! `mason.toml` parsing and validation.
//!
//! A manifest describes one Java compilation unit (its package, imports and
//! class declarations) together with the generator settings used on it.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    ClassDef, ConstructorDef, DEFAULT_INDENT, DEFAULT_PREFIX, FieldDef, GeneratorConfig, Manifest,
    MasonToml, MethodDef, ParamDef, ParseContext, UnitConfig, parse_manifest, validate_prefix,
};
