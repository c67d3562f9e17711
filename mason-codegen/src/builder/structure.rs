//! Nested type definitions.

use mason_ir::TypeParamName;

use super::{
    function::MethodSpec,
    types::{Modifiers, TypeRef},
};

/// A declarative specification for a nested class.
///
/// Member order is fixed: fields first, then methods, each in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassSpec {
    /// Class name.
    pub name: String,
    /// Modifiers.
    pub modifiers: Modifiers,
    /// Type parameters.
    pub type_params: Vec<TypeParamName>,
    /// Fields.
    pub fields: Vec<FieldDecl>,
    /// Methods.
    pub methods: Vec<MethodSpec>,
}

impl ClassSpec {
    /// Create a new public class spec.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Modifiers::public(),
            type_params: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Set modifiers.
    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set type parameters.
    pub fn type_params(mut self, params: &[TypeParamName]) -> Self {
        self.type_params = params.to_vec();
        self
    }

    /// Add multiple fields.
    pub fn fields(mut self, fields: impl IntoIterator<Item = FieldDecl>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Add a method.
    pub fn method(mut self, method: MethodSpec) -> Self {
        self.methods.push(method);
        self
    }

    /// Add multiple methods.
    pub fn methods(mut self, methods: impl IntoIterator<Item = MethodSpec>) -> Self {
        self.methods.extend(methods);
        self
    }

    /// The class name applied to its own type parameters.
    pub fn self_type(&self) -> TypeRef {
        TypeRef::parameterized(&self.name, &self.type_params)
    }
}

/// A field in a nested class.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub name: String,
    pub ty: TypeRef,
    pub modifiers: Modifiers,
}

impl FieldDecl {
    /// Create a new private field.
    pub fn private(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            modifiers: Modifiers::private(),
        }
    }
}
