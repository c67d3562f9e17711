//! Translation of synthesized members into Java syntax.

use mason_codegen::{
    SynthesizedMember,
    builder::{ClassSpec, FieldDecl, MethodRenderer, MethodSpec},
    synthesis::render_type_param_decls,
};
use mason_ir::DeclKind;

use crate::{
    JavaRenderer,
    ast::{Constructor, Field, Member, Method, Modifiers, Param, TypeDecl},
};

/// Lower one synthesized member.
pub fn lower(member: SynthesizedMember) -> Member {
    match member {
        SynthesizedMember::Method(spec) => lower_method(&spec),
        SynthesizedMember::Builder(spec) => Member::Type(lower_class(&spec)),
    }
}

fn lower_method(spec: &MethodSpec) -> Member {
    let params = spec
        .params
        .iter()
        .map(|p| Param::new(&p.name, p.ty.to_string()))
        .collect();
    let body = JavaRenderer.render_body(spec);

    match &spec.return_type {
        Some(returns) if !spec.is_constructor() => Member::Method(Method {
            modifiers: spec.modifiers.into(),
            type_params: render_type_param_decls(&spec.type_params),
            returns: returns.to_string(),
            name: spec.name.clone(),
            params,
            body: Some(body),
        }),
        _ => Member::Constructor(Constructor {
            modifiers: spec.modifiers.into(),
            name: spec.name.clone(),
            params,
            body,
            synthetic: false,
        }),
    }
}

fn lower_field(decl: &FieldDecl) -> Member {
    Member::Field(Field::new(&decl.name, decl.ty.to_string()).modifiers(decl.modifiers.into()))
}

fn lower_class(spec: &ClassSpec) -> TypeDecl {
    let fields = spec.fields.iter().map(lower_field);
    let methods = spec.methods.iter().map(lower_method);
    TypeDecl {
        kind: DeclKind::Class,
        modifiers: Modifiers::from(spec.modifiers),
        name: spec.name.clone(),
        type_params: spec.type_params.clone(),
        members: fields.chain(methods).collect(),
    }
}

#[cfg(test)]
mod tests {
    use mason_codegen::{CodeBuilder, ClassSynthesizer};
    use mason_ir::{ClassFacts, FieldSpec};

    use super::*;

    fn render(member: &Member) -> String {
        let mut builder = CodeBuilder::java();
        builder.emit(member);
        builder.build()
    }

    #[test]
    fn test_lower_generic_plan() {
        let facts = ClassFacts::new("Box")
            .type_param("T")
            .field(FieldSpec::new("value", "T"))
            .with_user_empty_constructor(true);
        let members: Vec<Member> = ClassSynthesizer::default()
            .synthesize(&facts)
            .into_members()
            .into_iter()
            .map(lower)
            .collect();

        assert_eq!(members.len(), 3);
        insta::assert_snapshot!(render(&members[0]), @r"
        private Box(Builder<T> builder) {
            this.value = builder.value;
        }
        ");
        insta::assert_snapshot!(render(&members[1]), @r"
        public static <T> Builder<T> builder() {
            return new Builder<T>();
        }
        ");
        insta::assert_snapshot!(render(&members[2]), @r"
        public static class Builder<T> {
            private T value;

            public Builder<T> withValue(T value) {
                this.value = value;
                return this;
            }

            public Box<T> build() {
                return new Box<T>(this);
            }
        }
        ");
    }

    #[test]
    fn test_lower_empty_constructor() {
        let members = ClassSynthesizer::default()
            .synthesize(&ClassFacts::new("Person"))
            .into_members();
        let Member::Constructor(empty) = lower(members[0].clone()) else {
            panic!("expected constructor");
        };
        assert_eq!(empty.name, "Person");
        assert!(empty.params.is_empty());
        assert!(empty.body.is_empty());
        assert!(!empty.synthetic);
        assert_eq!(empty.modifiers.prefix(), "public ");
    }
}
