//! Generate command report data structures.

use std::path::PathBuf;

use mason_codegen::{ClassOutcome, Diagnostic};

use super::output::{Output, Report};

/// Report data from a generation pass.
#[derive(Debug)]
pub struct GenerateReport {
    /// Rewritten classes, in unit order.
    pub classes: Vec<ClassOutcome>,
    /// Findings from the pass.
    pub diagnostics: Vec<Diagnostic>,
    /// The rendered unit.
    pub source: String,
    /// Where the unit was written, if anywhere.
    pub written: Option<PathBuf>,
    /// Whether writing was skipped on request.
    pub dry_run: bool,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for diag in &self.diagnostics {
            out.diagnostic(&diag.to_string());
        }

        if self.dry_run {
            out.divider("Preview");
            out.preformatted(self.source.trim_end());
            out.divider("Summary");
        }

        out.section(&format!("Builders ({})", self.classes.len()));
        for class in &self.classes {
            out.list_item(&format!("{}: {}", class.name, setter_list(&class.setters)));
            if class.added_empty_constructor {
                out.added_item(&format!("{}()", class.name));
            }
        }
        out.newline();

        match (&self.written, self.dry_run) {
            (_, true) => out.preformatted("Dry run: nothing written"),
            (Some(path), false) => out.key_value("Generated", &path.display().to_string()),
            (None, false) => out.preformatted("No output file: the unit declares no types"),
        }
    }
}

fn setter_list(setters: &[String]) -> String {
    if setters.is_empty() {
        "no setters".to_string()
    } else {
        setters.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    fn report(dry_run: bool) -> GenerateReport {
        GenerateReport {
            classes: vec![
                ClassOutcome {
                    name: "Person".into(),
                    setters: vec!["withName".into(), "withAge".into()],
                    added_empty_constructor: true,
                },
                ClassOutcome {
                    name: "Empty".into(),
                    setters: Vec::new(),
                    added_empty_constructor: false,
                },
            ],
            diagnostics: vec![Diagnostic::warning("class has no fields to build").at("Empty")],
            source: "class Person {\n}\n".into(),
            written: (!dry_run).then(|| PathBuf::from("Person.java")),
            dry_run,
        }
    }

    #[test]
    fn test_render_written() {
        let mut out = BufferOutput::default();
        report(false).render(&mut out);

        assert_eq!(
            out.stderr,
            ["warning: class has no fields to build (in Empty)"]
        );
        assert_eq!(
            out.stdout,
            [
                "Builders (2):",
                "  - Person: withName, withAge",
                "  + Person()",
                "  - Empty: no setters",
                "",
                "Generated: Person.java",
            ]
        );
    }

    #[test]
    fn test_render_preview() {
        let mut out = BufferOutput::default();
        report(true).render(&mut out);

        assert_eq!(out.stdout[0], "── Preview ──");
        assert_eq!(out.stdout[1], "class Person {\n}");
        assert_eq!(out.stdout.last().map(String::as_str), Some("Dry run: nothing written"));
    }
}
