//! Body templates for synthesized methods.
//!
//! Each [`MethodKind`] has exactly one template. Templates are data, not
//! text: they expand into [`Statement`]s and leave syntax to the host's
//! [`MethodRenderer`](crate::builder::MethodRenderer).

use crate::builder::{Expr, MethodKind, Statement, TypeRef};

/// The body of a synthesized method, parametrized by names and types.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyTemplate<'a> {
    /// `this.field = field; return this;`
    Setter { field: &'a str },
    /// `return new Builder<..>();`
    Factory { builder: &'a TypeRef },
    /// `return new Host<..>(this);`
    Build { host: &'a TypeRef },
    /// `this.f = builder.f;` for every field, in order.
    ConsumingConstructor { param: &'a str, fields: Vec<&'a str> },
    /// No statements.
    EmptyConstructor,
}

impl BodyTemplate<'_> {
    /// The method kind this template belongs to.
    pub fn kind(&self) -> MethodKind {
        match self {
            Self::Setter { .. } => MethodKind::Setter,
            Self::Factory { .. } => MethodKind::Factory,
            Self::Build { .. } => MethodKind::Build,
            Self::ConsumingConstructor { .. } => MethodKind::ConsumingConstructor,
            Self::EmptyConstructor => MethodKind::EmptyConstructor,
        }
    }

    /// Expand into body statements.
    pub fn statements(&self) -> Vec<Statement> {
        match self {
            Self::Setter { field } => vec![
                Statement::assign(Expr::this_field(*field), Expr::ident(*field)),
                Statement::return_(Expr::This),
            ],
            Self::Factory { builder } => vec![Statement::return_(Expr::new_instance(
                (*builder).clone(),
                Vec::new(),
            ))],
            Self::Build { host } => vec![Statement::return_(Expr::new_instance(
                (*host).clone(),
                vec![Expr::This],
            ))],
            Self::ConsumingConstructor { param, fields } => fields
                .iter()
                .map(|field| {
                    Statement::assign(
                        Expr::this_field(*field),
                        Expr::field(Expr::ident(*param), *field),
                    )
                })
                .collect(),
            Self::EmptyConstructor => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setter_template() {
        let stmts = BodyTemplate::Setter { field: "age" }.statements();
        assert_eq!(
            stmts,
            vec![
                Statement::assign(Expr::this_field("age"), Expr::ident("age")),
                Statement::return_(Expr::This),
            ]
        );
    }

    #[test]
    fn test_consuming_constructor_template() {
        let template = BodyTemplate::ConsumingConstructor {
            param: "builder",
            fields: vec!["name", "age"],
        };
        let stmts = template.statements();
        assert_eq!(stmts.len(), 2);
        assert_eq!(
            stmts[1],
            Statement::assign(
                Expr::this_field("age"),
                Expr::field(Expr::ident("builder"), "age")
            )
        );
        assert_eq!(template.kind(), MethodKind::ConsumingConstructor);
    }

    #[test]
    fn test_build_passes_this() {
        let host = TypeRef::named("Person");
        let stmts = BodyTemplate::Build { host: &host }.statements();
        assert_eq!(
            stmts,
            vec![Statement::return_(Expr::new_instance(
                TypeRef::named("Person"),
                vec![Expr::This]
            ))]
        );
    }

    #[test]
    fn test_empty_constructor_has_no_statements() {
        assert!(BodyTemplate::EmptyConstructor.statements().is_empty());
    }
}
