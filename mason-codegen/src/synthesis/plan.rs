//! The synthesized output for one class.

use mason_ir::TypeParamName;

use crate::{
    builder::{ClassSpec, FieldDecl, MethodSpec, Modifiers},
    host::SynthesizedMember,
};

/// Everything one class gains from a generation pass.
///
/// Owned by the pass that produced it and consumed once by
/// [`into_members`](Self::into_members).
#[derive(Debug, Clone, PartialEq)]
pub struct BuilderPlan {
    /// Name of the nested builder type.
    pub builder_type_name: String,
    /// The host's type parameters, copied verbatim onto the builder.
    pub type_params: Vec<TypeParamName>,
    /// Builder fields, one per participating host field.
    pub builder_fields: Vec<FieldDecl>,
    /// Setters, one per participating host field.
    pub setter_methods: Vec<MethodSpec>,
    pub factory_method: MethodSpec,
    pub build_method: MethodSpec,
    pub consuming_constructor: MethodSpec,
    /// Present only when the host has no hand-written no-arg constructor.
    pub empty_constructor: Option<MethodSpec>,
}

impl BuilderPlan {
    /// The nested builder type: fields, then setters, then `build()`.
    pub fn builder_type(&self) -> ClassSpec {
        ClassSpec::new(&self.builder_type_name)
            .modifiers(Modifiers::public_static())
            .type_params(&self.type_params)
            .fields(self.builder_fields.iter().cloned())
            .methods(self.setter_methods.iter().cloned())
            .method(self.build_method.clone())
    }

    /// Setter names, in order.
    pub fn setter_names(&self) -> Vec<&str> {
        self.setter_methods.iter().map(|m| m.name.as_str()).collect()
    }

    /// Members to append to the host class, in insertion order:
    /// `[empty constructor?, consuming constructor, factory, builder type]`.
    pub fn into_members(self) -> Vec<SynthesizedMember> {
        let builder = self.builder_type();
        let mut members = Vec::with_capacity(4);
        if let Some(empty) = self.empty_constructor {
            members.push(SynthesizedMember::Method(empty));
        }
        members.push(SynthesizedMember::Method(self.consuming_constructor));
        members.push(SynthesizedMember::Method(self.factory_method));
        members.push(SynthesizedMember::Builder(builder));
        members
    }
}
