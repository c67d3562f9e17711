//! Whole-class synthesis.

use mason_ir::ClassFacts;

use super::{
    filter::participating,
    methods::MethodSynthesizer,
    naming::{BUILDER_CLASS_NAME, builder_param_name},
    plan::BuilderPlan,
    templates::BodyTemplate,
};
use crate::builder::{FieldDecl, MethodSpec, Modifiers, ParamSpec, TypeRef};

/// Turns [`ClassFacts`] into a [`BuilderPlan`].
///
/// Total over well-formed facts; holds no state between classes.
#[derive(Debug, Clone, Default)]
pub struct ClassSynthesizer {
    methods: MethodSynthesizer,
}

impl ClassSynthesizer {
    pub fn new(methods: MethodSynthesizer) -> Self {
        Self { methods }
    }

    /// Create a synthesizer using the given setter prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::new(MethodSynthesizer::new(prefix))
    }

    pub fn methods(&self) -> &MethodSynthesizer {
        &self.methods
    }

    pub fn synthesize(&self, facts: &ClassFacts) -> BuilderPlan {
        let params = &facts.type_params;
        let fields: Vec<_> = participating(&facts.fields).collect();

        let builder_fields = fields
            .iter()
            .map(|field| FieldDecl::private(&field.name, TypeRef::named(&field.ty)))
            .collect();
        let setter_methods = fields
            .iter()
            .map(|field| self.methods.setter(field, params))
            .collect();

        let param = builder_param_name();
        let consuming = BodyTemplate::ConsumingConstructor {
            param: &param,
            fields: fields.iter().map(|f| f.name.as_str()).collect(),
        };
        let consuming_constructor = MethodSpec::new(consuming.kind(), &facts.name)
            .modifiers(Modifiers::private())
            .param(ParamSpec::new(&param, self.methods.builder_type(params)))
            .body(consuming.statements());

        let empty_constructor = (!facts.has_user_empty_constructor).then(|| {
            let empty = BodyTemplate::EmptyConstructor;
            MethodSpec::new(empty.kind(), &facts.name).body(empty.statements())
        });

        BuilderPlan {
            builder_type_name: BUILDER_CLASS_NAME.to_string(),
            type_params: params.clone(),
            builder_fields,
            setter_methods,
            factory_method: self.methods.factory(params),
            build_method: self.methods.build(&facts.name, params),
            consuming_constructor,
            empty_constructor,
        }
    }
}

#[cfg(test)]
mod tests {
    use mason_ir::FieldSpec;

    use super::*;
    use crate::{
        builder::{Expr, MethodKind, Statement},
        host::SynthesizedMember,
    };

    fn person() -> ClassFacts {
        ClassFacts::new("Person").fields([
            FieldSpec::new("name", "String"),
            FieldSpec::new("age", "int"),
        ])
    }

    #[test]
    fn test_person_plan() {
        let plan = ClassSynthesizer::with_prefix("with").synthesize(&person());

        assert_eq!(plan.builder_type_name, "Builder");
        assert_eq!(plan.setter_names(), ["withName", "withAge"]);
        assert!(plan.empty_constructor.is_some());
        assert_eq!(plan.build_method.name, "build");
        assert_eq!(
            plan.build_method.return_type.as_ref().map(ToString::to_string).as_deref(),
            Some("Person")
        );

        let consuming = &plan.consuming_constructor;
        assert_eq!(consuming.kind, MethodKind::ConsumingConstructor);
        assert_eq!(consuming.name, "Person");
        assert!(consuming.modifiers.visibility.is_private());
        assert_eq!(consuming.params[0].name, "builder");
        assert_eq!(consuming.params[0].ty.to_string(), "Builder");
        assert_eq!(consuming.body.len(), 2);
    }

    #[test]
    fn test_generic_plan_propagates_type_params() {
        let facts = ClassFacts::new("Box")
            .type_param("T")
            .field(FieldSpec::new("value", "T"))
            .with_user_empty_constructor(true);
        let plan = ClassSynthesizer::default().synthesize(&facts);

        assert!(plan.empty_constructor.is_none());
        assert_eq!(plan.builder_type().self_type().to_string(), "Builder<T>");
        assert_eq!(plan.consuming_constructor.params[0].ty.to_string(), "Builder<T>");
        assert_eq!(
            plan.factory_method.return_type.as_ref().map(ToString::to_string).as_deref(),
            Some("Builder<T>")
        );
        assert_eq!(
            plan.setter_methods[0].return_type.as_ref().map(ToString::to_string).as_deref(),
            Some("Builder<T>")
        );
    }

    #[test]
    fn test_shared_fields_are_left_out() {
        let facts = ClassFacts::new("Config").fields([
            FieldSpec::shared("DEFAULT", "Config"),
            FieldSpec::new("port", "int"),
        ]);
        let plan = ClassSynthesizer::default().synthesize(&facts);

        assert_eq!(plan.setter_names(), ["withPort"]);
        assert_eq!(plan.builder_fields.len(), 1);
        assert_eq!(
            plan.consuming_constructor.body,
            vec![Statement::assign(
                Expr::this_field("port"),
                Expr::field(Expr::ident("builder"), "port")
            )]
        );
    }

    #[test]
    fn test_builder_member_order() {
        let builder = ClassSynthesizer::default().synthesize(&person()).builder_type();

        assert!(builder.modifiers.is_static);
        let fields: Vec<_> = builder.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(fields, ["name", "age"]);
        let methods: Vec<_> = builder.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(methods, ["withName", "withAge", "build"]);
    }

    #[test]
    fn test_member_order_with_empty_constructor() {
        let members = ClassSynthesizer::default().synthesize(&person()).into_members();

        let kinds: Vec<_> = members
            .iter()
            .map(|m| match m {
                SynthesizedMember::Method(spec) => Some(spec.kind),
                SynthesizedMember::Builder(_) => None,
            })
            .collect();
        assert_eq!(
            kinds,
            [
                Some(MethodKind::EmptyConstructor),
                Some(MethodKind::ConsumingConstructor),
                Some(MethodKind::Factory),
                None,
            ]
        );
    }

    #[test]
    fn test_member_order_without_empty_constructor() {
        let facts = person().with_user_empty_constructor(true);
        let members = ClassSynthesizer::default().synthesize(&facts).into_members();
        assert_eq!(members.len(), 3);
        assert!(matches!(
            &members[0],
            SynthesizedMember::Method(spec) if spec.kind == MethodKind::ConsumingConstructor
        ));
    }

    #[test]
    fn test_setter_count_matches_participating_fields() {
        let fields = vec![
            FieldSpec::new("a", "int"),
            FieldSpec::shared("B", "int"),
            FieldSpec::new("c", "long"),
            FieldSpec::shared("D", "String"),
            FieldSpec::new("e", "T"),
        ];
        let facts = ClassFacts::new("Wide").fields(fields.clone());
        let plan = ClassSynthesizer::with_prefix("set").synthesize(&facts);

        let expected: Vec<_> = fields
            .iter()
            .filter(|f| !f.is_shared)
            .map(|f| crate::synthesis::resolve_setter_name(&f.name, "set"))
            .collect();
        assert_eq!(plan.setter_names(), expected);
        assert_eq!(plan.consuming_constructor.body.len(), expected.len());
    }
}
