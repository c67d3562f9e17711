//! Check command report data structures.

use std::path::PathBuf;

use mason_ir::DeclKind;

use super::output::{Output, Report};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    pub package: Option<String>,
    /// Effective setter prefix.
    pub prefix: String,
    /// Where `generate` would write.
    pub output: Option<PathBuf>,
    pub classes: Vec<ClassSummary>,
}

/// One top-level declaration.
#[derive(Debug)]
pub struct ClassSummary {
    pub name: String,
    pub kind: DeclKind,
    /// `None` for declarations that are not classes.
    pub builder: Option<BuilderSummary>,
}

/// What a pass would add to a class.
#[derive(Debug)]
pub struct BuilderSummary {
    /// Participating fields.
    pub fields: usize,
    pub type_params: usize,
    pub adds_empty_constructor: bool,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        if let Some(package) = &self.package {
            out.key_value("Package", package);
        }
        let prefix = if self.prefix.is_empty() {
            "(none)"
        } else {
            self.prefix.as_str()
        };
        out.key_value("Setter prefix", prefix);
        if let Some(output) = &self.output {
            out.key_value("Output", &output.display().to_string());
        }
        out.newline();

        out.section(&format!("Declarations ({})", self.classes.len()));
        for class in &self.classes {
            out.list_item(&class.describe());
        }
    }
}

impl ClassSummary {
    fn describe(&self) -> String {
        match &self.builder {
            None => format!("{} {} (skipped)", self.kind, self.name),
            Some(b) => {
                let mut text = format!(
                    "{} {}: {} field{}",
                    self.kind,
                    self.name,
                    b.fields,
                    if b.fields == 1 { "" } else { "s" }
                );
                if b.type_params > 0 {
                    text.push_str(&format!(", {} type parameter(s)", b.type_params));
                }
                if b.adds_empty_constructor {
                    text.push_str(", adds empty constructor");
                }
                text
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render() {
        let report = CheckReport {
            config_path: PathBuf::from("mason.toml"),
            package: None,
            prefix: String::new(),
            output: Some(PathBuf::from("Box.java")),
            classes: vec![
                ClassSummary {
                    name: "Box".into(),
                    kind: DeclKind::Class,
                    builder: Some(BuilderSummary {
                        fields: 1,
                        type_params: 1,
                        adds_empty_constructor: true,
                    }),
                },
                ClassSummary {
                    name: "Shape".into(),
                    kind: DeclKind::Interface,
                    builder: None,
                },
            ],
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.stdout,
            [
                "✓ mason.toml is valid",
                "",
                "Setter prefix: (none)",
                "Output: Box.java",
                "",
                "Declarations (2):",
                "  - class Box: 1 field, 1 type parameter(s), adds empty constructor",
                "  - interface Shape (skipped)",
            ]
        );
        assert!(out.stderr.is_empty());
    }
}
