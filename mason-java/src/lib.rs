//! Java host for the mason builder generator.
//!
//! This crate supplies everything `mason-codegen` leaves to a host: a Java
//! syntax tree, resolution (which adds the compiler's default constructor),
//! rendering of synthesized members, and a working copy that commits a
//! generation pass to disk in one step.
//!
//! # Usage
//!
//! ```ignore
//! use mason_codegen::{GeneratorDriver, GeneratorOptions};
//! use mason_java::{JavaFile, JavaWorkingCopy};
//! use mason_manifest::Manifest;
//!
//! let manifest = Manifest::from_file("mason.toml")?;
//! let file = JavaFile::from_manifest(&manifest)?;
//! let copy = JavaWorkingCopy::new(file).target("src/Person.java");
//!
//! let report = GeneratorDriver::new(GeneratorOptions::new()).generate(copy)?;
//! println!("{}", report.output.source);
//! ```

mod from_manifest;
mod lower;
mod renderer;
mod resolve;
mod working_copy;

pub mod ast;

pub use ast::{JavaFile, TypeDecl};
pub use lower::lower;
pub use renderer::JavaRenderer;
pub use resolve::{ResolvedDecl, resolve};
pub use working_copy::{Committed, JavaWorkingCopy};
