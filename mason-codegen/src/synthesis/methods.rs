//! Individual method synthesis.

use mason_ir::{FieldSpec, TypeParamName};

use super::{
    naming::{
        BUILD_METHOD_NAME, BUILDER_CLASS_NAME, DEFAULT_PREFIX, FACTORY_METHOD_NAME,
        resolve_setter_name,
    },
    templates::BodyTemplate,
};
use crate::builder::{MethodSpec, Modifiers, ParamSpec, TypeRef};

/// Render type arguments: `<A,B>`, or nothing when empty.
///
/// Every use of a parametrized name in a plan (builder type in signatures,
/// host type in `build()`) goes through this one function. Bounds are
/// dropped; declaration sites use [`render_type_param_decls`].
pub fn render_type_params(params: &[TypeParamName]) -> String {
    render_angled(params, TypeParamName::name)
}

/// Like [`render_type_params`], but keeps bounds: `<T extends Number>`.
pub fn render_type_param_decls(params: &[TypeParamName]) -> String {
    render_angled(params, TypeParamName::as_str)
}

fn render_angled(params: &[TypeParamName], text: fn(&TypeParamName) -> &str) -> String {
    if params.is_empty() {
        return String::new();
    }
    let joined: Vec<&str> = params.iter().map(text).collect();
    format!("<{}>", joined.join(","))
}

/// Builds the setter, factory and build method specs.
#[derive(Debug, Clone)]
pub struct MethodSynthesizer {
    prefix: String,
}

impl Default for MethodSynthesizer {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl MethodSynthesizer {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The configured setter prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The builder type applied to the host's type parameters.
    pub fn builder_type(&self, type_params: &[TypeParamName]) -> TypeRef {
        TypeRef::parameterized(BUILDER_CLASS_NAME, type_params)
    }

    /// Fluent setter for one field, returning the builder.
    pub fn setter(&self, field: &FieldSpec, type_params: &[TypeParamName]) -> MethodSpec {
        let template = BodyTemplate::Setter { field: &field.name };
        MethodSpec::new(template.kind(), resolve_setter_name(&field.name, &self.prefix))
            .param(ParamSpec::new(&field.name, TypeRef::named(&field.ty)))
            .returns(self.builder_type(type_params))
            .body(template.statements())
    }

    /// Static, generic `builder()` factory.
    pub fn factory(&self, type_params: &[TypeParamName]) -> MethodSpec {
        let builder = self.builder_type(type_params);
        let template = BodyTemplate::Factory { builder: &builder };
        MethodSpec::new(template.kind(), FACTORY_METHOD_NAME)
            .modifiers(Modifiers::public_static())
            .type_params(type_params)
            .returns(builder.clone())
            .body(template.statements())
    }

    /// Terminal `build()` delegating to the host's consuming constructor.
    pub fn build(&self, host_name: &str, type_params: &[TypeParamName]) -> MethodSpec {
        let host = TypeRef::parameterized(host_name, type_params);
        let template = BodyTemplate::Build { host: &host };
        MethodSpec::new(template.kind(), BUILD_METHOD_NAME)
            .returns(host.clone())
            .body(template.statements())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{Expr, MethodKind, Statement};

    fn params(names: &[&str]) -> Vec<TypeParamName> {
        names.iter().map(|n| TypeParamName::new(*n)).collect()
    }

    #[test]
    fn test_render_type_params() {
        assert_eq!(render_type_params(&[]), "");
        assert_eq!(render_type_params(&params(&["T"])), "<T>");
        assert_eq!(render_type_params(&params(&["K", "V"])), "<K,V>");
    }

    #[test]
    fn test_bounded_params() {
        let bounded = params(&["T extends Number", "U"]);
        assert_eq!(render_type_params(&bounded), "<T,U>");
        assert_eq!(render_type_param_decls(&bounded), "<T extends Number,U>");
        assert_eq!(
            MethodSynthesizer::default()
                .setter(&FieldSpec::new("value", "T"), &bounded)
                .return_type
                .map(|t| t.to_string())
                .as_deref(),
            Some("Builder<T,U>")
        );
    }

    #[test]
    fn test_setter() {
        let synth = MethodSynthesizer::new("with");
        let setter = synth.setter(&FieldSpec::new("age", "int"), &[]);

        assert_eq!(setter.kind, MethodKind::Setter);
        assert_eq!(setter.name, "withAge");
        assert_eq!(setter.params[0].name, "age");
        assert_eq!(setter.params[0].ty.to_string(), "int");
        assert_eq!(
            setter.return_type.as_ref().map(ToString::to_string).as_deref(),
            Some("Builder")
        );
        assert!(setter.modifiers.visibility.is_public());
        assert!(!setter.modifiers.is_static);
        assert_eq!(setter.body.last(), Some(&Statement::return_(Expr::This)));
    }

    #[test]
    fn test_setter_without_prefix() {
        let synth = MethodSynthesizer::new("");
        assert_eq!(synth.setter(&FieldSpec::new("age", "int"), &[]).name, "age");
    }

    #[test]
    fn test_factory_is_static_and_generic() {
        let synth = MethodSynthesizer::default();
        let factory = synth.factory(&params(&["K", "V"]));

        assert_eq!(factory.name, "builder");
        assert!(factory.modifiers.is_static);
        assert!(factory.params.is_empty());
        assert_eq!(factory.type_params, params(&["K", "V"]));
        assert_eq!(
            factory.return_type.map(|t| t.to_string()).as_deref(),
            Some("Builder<K,V>")
        );
    }

    #[test]
    fn test_build_returns_host() {
        let synth = MethodSynthesizer::default();
        let build = synth.build("Box", &params(&["T"]));

        assert_eq!(build.name, "build");
        assert!(!build.modifiers.is_static);
        assert_eq!(
            build.return_type.as_ref().map(ToString::to_string).as_deref(),
            Some("Box<T>")
        );
        assert_eq!(
            build.body,
            vec![Statement::return_(Expr::new_instance(
                TypeRef::parameterized("Box", &params(&["T"])),
                vec![Expr::This]
            ))]
        );
    }
}
