//! Core utilities for the mason builder generator.
//!
//! This crate provides the small string and file helpers shared by every
//! other crate in the workspace.

mod file;
mod utils;

// File operations
pub use file::write_atomic;
// String utilities
pub use utils::{capitalize_first, join_camel, uncapitalize_first};
