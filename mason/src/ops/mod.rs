//! Core operations.
//!
//! This module contains the business logic for mason commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod facts;
pub mod generate;

pub use check::check;
pub use facts::facts;
pub use generate::{GenerateOptions, generate};
