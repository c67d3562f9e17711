//! Java rendering of synthesized method bodies.

use mason_codegen::builder::{Expr, MethodRenderer, Statement};

/// Renders [`Statement`]s and [`Expr`]s as Java source.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaRenderer;

impl MethodRenderer for JavaRenderer {
    fn render_statement(&self, stmt: &Statement) -> String {
        match stmt {
            Statement::Assign { target, value } => format!(
                "{} = {};",
                self.render_expr(target),
                self.render_expr(value)
            ),
            Statement::Return(value) => format!("return {};", self.render_expr(value)),
        }
    }

    fn render_expr(&self, expr: &Expr) -> String {
        match expr {
            Expr::This => "this".to_string(),
            Expr::Ident(name) => name.clone(),
            Expr::Field { target, name } => format!("{}.{}", self.render_expr(target), name),
            Expr::New { ty, args } => {
                let args: Vec<String> = args.iter().map(|a| self.render_expr(a)).collect();
                format!("new {}({})", ty, args.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use mason_codegen::builder::TypeRef;
    use mason_ir::TypeParamName;

    use super::*;

    #[test]
    fn test_render_assign() {
        let stmt = Statement::assign(
            Expr::this_field("name"),
            Expr::field(Expr::ident("builder"), "name"),
        );
        assert_eq!(JavaRenderer.render_statement(&stmt), "this.name = builder.name;");
    }

    #[test]
    fn test_render_return_new() {
        let ty = TypeRef::parameterized("Builder", &[TypeParamName::new("T")]);
        let stmt = Statement::return_(Expr::new_instance(ty, vec![]));
        assert_eq!(JavaRenderer.render_statement(&stmt), "return new Builder<T>();");

        let host = Statement::return_(Expr::new_instance(
            TypeRef::named("Person"),
            vec![Expr::This],
        ));
        assert_eq!(JavaRenderer.render_statement(&host), "return new Person(this);");
    }

    #[test]
    fn test_render_return_this() {
        assert_eq!(
            JavaRenderer.render_statement(&Statement::return_(Expr::This)),
            "return this;"
        );
    }
}
