//! Check operation - manifest validation.

use eyre::Result;
use mason_manifest::MasonToml;

use super::facts;
use crate::reports::{BuilderSummary, CheckReport, ClassSummary};

/// Execute the check operation.
///
/// The manifest has already been parsed and validated by the time it gets
/// here; this resolves the unit and summarizes what a pass would do.
pub fn check(mason_toml: &MasonToml) -> Result<CheckReport> {
    let manifest = mason_toml.manifest();
    let facts = facts(manifest)?;

    let classes = manifest
        .classes
        .iter()
        .map(|class| ClassSummary {
            name: class.name().to_string(),
            kind: class.kind,
            builder: facts
                .iter()
                .find(|f| f.name == class.name())
                .map(|f| BuilderSummary {
                    fields: f.fields.len(),
                    type_params: f.type_params.len(),
                    adds_empty_constructor: !f.has_user_empty_constructor,
                }),
        })
        .collect();

    Ok(CheckReport {
        config_path: mason_toml.path().to_path_buf(),
        package: manifest.unit.package().map(str::to_string),
        prefix: manifest.generator.prefix().to_string(),
        output: mason_toml.output_path(),
        classes,
    })
}

#[cfg(test)]
mod tests {
    use mason_ir::DeclKind;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_check_summary() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mason.toml");
        std::fs::write(
            &path,
            r#"
            [generator]
            prefix = "set"

            [[class]]
            name = "Person"

            [[class.field]]
            name = "name"
            type = "String"

            [[class.constructor]]

            [[class]]
            name = "Color"
            kind = "enum"
            "#,
        )
        .unwrap();

        let report = check(&MasonToml::open(&path).unwrap()).unwrap();
        assert_eq!(report.prefix, "set");
        assert_eq!(report.output, Some(dir.path().join("Person.java")));
        assert_eq!(report.classes.len(), 2);

        let person = report.classes[0].builder.as_ref().unwrap();
        assert_eq!(person.fields, 1);
        assert!(!person.adds_empty_constructor);

        assert_eq!(report.classes[1].kind, DeclKind::Enum);
        assert!(report.classes[1].builder.is_none());
    }
}
