//! Java syntax tree.
//!
//! Just enough of Java to hold a compilation unit's top-level declarations
//! and their members, and to render them back to source through
//! [`CodeBuilder`](mason_codegen::CodeBuilder).

mod decl;
mod file;
mod members;
mod modifiers;

pub use decl::TypeDecl;
pub use file::JavaFile;
pub use members::{Constructor, Field, Member, Method, Param};
pub use modifiers::{Modifier, Modifiers};
