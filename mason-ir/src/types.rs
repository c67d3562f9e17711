//! Core type definitions.

use serde::{Deserialize, Serialize};

/// Kind of a top-level type declaration in a compilation unit.
///
/// Only [`DeclKind::Class`] declarations receive a builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclKind {
    #[default]
    Class,
    Interface,
    Enum,
    Record,
    Annotation,
}

impl DeclKind {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclKind::Class => "class",
            DeclKind::Interface => "interface",
            DeclKind::Enum => "enum",
            DeclKind::Record => "record",
            DeclKind::Annotation => "annotation",
        }
    }

    /// Returns true for class-kind declarations.
    pub fn is_class(&self) -> bool {
        matches!(self, DeclKind::Class)
    }
}

impl std::fmt::Display for DeclKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decl_kind_as_str() {
        assert_eq!(DeclKind::Class.as_str(), "class");
        assert_eq!(DeclKind::Interface.as_str(), "interface");
        assert_eq!(DeclKind::Annotation.to_string(), "annotation");
    }

    #[test]
    fn test_decl_kind_is_class() {
        assert!(DeclKind::Class.is_class());
        assert!(!DeclKind::Enum.is_class());
        assert!(!DeclKind::Record.is_class());
    }
}
