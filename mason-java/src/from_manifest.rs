//! Building a [`JavaFile`] from a `mason.toml` manifest.

use eyre::{Result, WrapErr};
use mason_ir::TypeParamName;
use mason_manifest::{ClassDef, ConstructorDef, FieldDef, Manifest, MethodDef, ParamDef};

use crate::ast::{Constructor, Field, JavaFile, Member, Method, Modifiers, Param, TypeDecl};

impl JavaFile {
    /// Convert the unit described by a manifest.
    pub fn from_manifest(manifest: &Manifest) -> Result<Self> {
        let types = manifest
            .classes
            .iter()
            .map(|class| {
                convert_class(class).wrap_err_with(|| format!("in class '{}'", class.name()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            package: manifest.unit.package().map(str::to_string),
            imports: manifest.unit.imports().map(str::to_string).collect(),
            types,
        })
    }
}

fn convert_class(class: &ClassDef) -> Result<TypeDecl> {
    let mut members = Vec::new();
    for field in &class.fields {
        members.push(Member::Field(convert_field(field)?));
    }
    for constructor in &class.constructors {
        members.push(Member::Constructor(convert_constructor(class.name(), constructor)?));
    }
    for method in &class.methods {
        members.push(Member::Method(convert_method(method)?));
    }

    Ok(TypeDecl {
        kind: class.kind,
        modifiers: Modifiers::parse(class.modifiers())?,
        name: class.name().to_string(),
        type_params: class
            .type_params()
            .map(|p| TypeParamName::new(p.split_whitespace().collect::<Vec<_>>().join(" ")))
            .collect(),
        members,
    })
}

fn convert_field(field: &FieldDef) -> Result<Field> {
    let converted =
        Field::new(field.name(), field.ty()).modifiers(Modifiers::parse(field.modifiers())?);
    Ok(match &field.init {
        Some(init) => converted.init(init),
        None => converted,
    })
}

fn convert_constructor(class: &str, constructor: &ConstructorDef) -> Result<Constructor> {
    Ok(Constructor {
        modifiers: Modifiers::parse(constructor.modifiers())?,
        name: class.to_string(),
        params: convert_params(&constructor.params),
        body: body_lines(&constructor.body),
        synthetic: false,
    })
}

fn convert_method(method: &MethodDef) -> Result<Method> {
    Ok(Method::new(method.name(), &method.returns)
        .modifiers(Modifiers::parse(method.modifiers())?)
        .body(method.body.as_deref().map(body_lines))
        .params(convert_params(&method.params)))
}

fn convert_params(params: &[ParamDef]) -> Vec<Param> {
    params.iter().map(|p| Param::new(p.name(), &p.ty)).collect()
}

/// One statement per non-empty line, without surrounding whitespace.
fn body_lines(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use mason_ir::DeclKind;

    use super::*;

    fn convert(src: &str) -> JavaFile {
        let manifest: Manifest = src.parse().unwrap();
        JavaFile::from_manifest(&manifest).unwrap()
    }

    #[test]
    fn test_convert_unit() {
        let file = convert(
            r#"
            [unit]
            package = "com.example"
            imports = ["java.util.List"]

            [[class]]
            name = "Team"
            modifiers = ["public"]
            type-params = ["T"]

            [[class.field]]
            name = "members"
            type = "List<T>"
            modifiers = ["private"]

            [[class.field]]
            name = "MAX"
            type = "int"
            modifiers = ["private", "static", "final"]
            init = "11"

            [[class.method]]
            name = "size"
            modifiers = ["public"]
            returns = "int"
            body = """
                return members.size();
            """
            "#,
        );

        assert_eq!(file.package.as_deref(), Some("com.example"));
        assert_eq!(file.imports, ["java.util.List"]);
        let team = &file.types[0];
        assert_eq!(team.kind, DeclKind::Class);
        assert_eq!(team.type_params, [TypeParamName::new("T")]);
        assert_eq!(team.members.len(), 3);
        let Member::Field(max) = &team.members[1] else {
            panic!("expected field");
        };
        assert!(max.modifiers.is_static());
        assert_eq!(max.init.as_deref(), Some("11"));
        let Member::Method(size) = &team.members[2] else {
            panic!("expected method");
        };
        assert_eq!(size.body, Some(vec!["return members.size();".to_string()]));
    }

    #[test]
    fn test_bound_whitespace_normalized() {
        let file = convert("[[class]]\nname = \"NumBox\"\ntype-params = [\"T   extends\tNumber\"]\n");
        let param = &file.types[0].type_params[0];
        assert_eq!(param.as_str(), "T extends Number");
        assert_eq!(param.name(), "T");
    }

    #[test]
    fn test_convert_constructor() {
        let file = convert(
            r#"
            [[class]]
            name = "Person"

            [[class.constructor]]
            modifiers = ["public"]
            params = [{ name = "name", type = "String" }]
            body = "this.name = name;"
            "#,
        );
        let Member::Constructor(constructor) = &file.types[0].members[0] else {
            panic!("expected constructor");
        };
        assert_eq!(constructor.name, "Person");
        assert_eq!(constructor.params, [Param::new("name", "String")]);
        assert_eq!(constructor.body, ["this.name = name;"]);
        assert!(!constructor.synthetic);
    }

    #[test]
    fn test_body_lines() {
        assert_eq!(body_lines("  a;\n\n   b;  \n"), ["a;", "b;"]);
        assert!(body_lines("").is_empty());
    }
}
