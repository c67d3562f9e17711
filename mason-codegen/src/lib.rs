//! Builder-pattern synthesis engine for mason.
//!
//! Given the structural facts of a class, this crate derives a complete
//! builder: a nested `Builder` type with one fluent setter per instance
//! field, a static `builder()` factory, a terminal `build()` method, and the
//! constructors on the host class that tie them together. The output is a set
//! of abstract member specifications; rendering them into real syntax is left
//! to a host crate (e.g., `mason-java`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, MethodSpec, ClassSpec, etc.)
//! - [`synthesis`] - FieldFilter, NameResolver, MethodSynthesizer, ClassSynthesizer
//! - [`host`] - The boundary a host implements (ClassView, WorkingCopy)
//! - [`driver`] - GeneratorDriver, one generation pass over a compilation unit
//! - [`testing`] - In-memory host for tests (feature-gated)

pub mod builder;
mod diagnostic;
pub mod driver;
mod error;
pub mod host;
pub mod synthesis;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use diagnostic::{Diagnostic, Severity};
pub use driver::{
    ClassOutcome, GenerationReport, GeneratorDriver, GeneratorOptions, SyntheticConstructors,
    extract_facts,
};
pub use error::GenerateError;
pub use host::{ClassView, HostError, MemberInfo, SynthesizedMember, WorkingCopy};
pub use synthesis::{BuilderPlan, ClassSynthesizer, MethodSynthesizer};
