//! Type references and modifiers for synthesized members.

use mason_ir::TypeParamName;

use crate::synthesis::render_type_params;

/// A type reference as it appears in a signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A type written verbatim (e.g., `String`, `List<Integer>`, `T`).
    Named(String),
    /// A named type applied to the host's type parameters (e.g., `Builder<K,V>`).
    Parameterized {
        /// Base type name.
        base: String,
        /// Type arguments, in declaration order.
        params: Vec<TypeParamName>,
    },
}

impl TypeRef {
    /// Create a named type reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Create a parameterized type reference.
    pub fn parameterized(base: impl Into<String>, params: &[TypeParamName]) -> Self {
        Self::Parameterized {
            base: base.into(),
            params: params.to_vec(),
        }
    }

    /// The base name without type arguments.
    pub fn base(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::Parameterized { base, .. } => base,
        }
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Parameterized { base, params } => {
                write!(f, "{}{}", base, render_type_params(params))
            }
        }
    }
}

/// Visibility/access level for types and members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Accessible from anywhere.
    #[default]
    Public,
    /// Accessible only inside the declaring type.
    Private,
    /// No access modifier (package-private in Java).
    Package,
}

impl Visibility {
    /// Check if this is a public visibility.
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Public)
    }

    /// Check if this is a private visibility.
    pub fn is_private(&self) -> bool {
        matches!(self, Self::Private)
    }
}

/// Modifiers on a synthesized member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub visibility: Visibility,
    /// Class-scope (static) member.
    pub is_static: bool,
}

impl Modifiers {
    pub fn public() -> Self {
        Self {
            visibility: Visibility::Public,
            is_static: false,
        }
    }

    pub fn private() -> Self {
        Self {
            visibility: Visibility::Private,
            is_static: false,
        }
    }

    pub fn public_static() -> Self {
        Self {
            visibility: Visibility::Public,
            is_static: true,
        }
    }
}
