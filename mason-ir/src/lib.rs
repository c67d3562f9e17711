//! Structural facts for the mason builder generator.
//!
//! These are the values the generator reads out of a resolved class
//! declaration before synthesizing anything:
//!
//! ```text
//! host class node → ClassFacts (this crate) → BuilderPlan (mason-codegen) → host class node
//! ```
//!
//! The types are:
//! - Host-agnostic (no editor or compiler handles)
//! - Immutable once extracted; one set per class per generation pass
//! - Serializable, so a pass can be inspected as JSON

mod facts;
mod types;

pub use facts::{ClassFacts, FieldSpec, TypeParamName};
pub use types::DeclKind;
