//! One generation pass over a compilation unit.

use std::collections::{HashMap, HashSet};

use mason_ir::{ClassFacts, FieldSpec};
use tracing::{debug, info, warn};

use crate::{
    diagnostic::Diagnostic,
    error::GenerateError,
    host::{ClassView, MemberInfo, WorkingCopy},
    synthesis::{BUILDER_CLASS_NAME, ClassSynthesizer, DEFAULT_PREFIX, is_participating},
};

/// Options for a generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Setter prefix; empty means setters are named after their fields.
    pub prefix: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl GeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}

/// What happened to one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassOutcome {
    pub name: String,
    /// Setter names, in field order.
    pub setters: Vec<String>,
    pub added_empty_constructor: bool,
}

/// Result of a successful pass.
#[derive(Debug)]
pub struct GenerationReport<O> {
    /// One entry per rewritten class, in unit order.
    pub classes: Vec<ClassOutcome>,
    pub diagnostics: Vec<Diagnostic>,
    /// Whatever the host's commit produced.
    pub output: O,
}

impl<O> GenerationReport<O> {
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }
}

/// Whether each class's no-argument constructor is compiler-supplied.
///
/// Keyed by simple name and built over the whole unit before any class is
/// processed. Later declarations with the same name win.
#[derive(Debug, Clone, Default)]
pub struct SyntheticConstructors(HashMap<String, bool>);

impl SyntheticConstructors {
    pub fn scan<D: ClassView>(decls: &[D]) -> Self {
        Self(
            decls
                .iter()
                .filter(|decl| decl.kind().is_class())
                .map(|decl| {
                    (
                        decl.simple_name().to_string(),
                        decl.has_synthetic_constructor(),
                    )
                })
                .collect(),
        )
    }

    pub fn is_synthetic(&self, class: &str) -> bool {
        self.0.get(class).copied().unwrap_or(false)
    }
}

/// Read the facts of one class declaration.
///
/// Only participating fields are collected. A hand-written empty constructor
/// is one the class declares with zero parameters and that the lookup does
/// not mark as compiler-supplied.
pub fn extract_facts(
    decl: &impl ClassView,
    synthetic: &SyntheticConstructors,
) -> Result<ClassFacts, GenerateError> {
    let name = decl.simple_name();
    if name.is_empty() {
        return Err(GenerateError::mismatch("<anonymous>", "declaration has no name"));
    }

    let type_params = decl.type_parameters();
    {
        let mut seen = HashSet::new();
        if let Some(dup) = type_params.iter().find(|p| !seen.insert(p.name())) {
            return Err(GenerateError::mismatch(
                name,
                format!("type parameter `{}` is declared twice", dup.name()),
            ));
        }
    }

    let members = decl.members();
    let mut fields = Vec::new();
    let mut declares_empty = false;
    for member in &members {
        match member {
            MemberInfo::Field {
                name: field,
                ty,
                is_static,
            } => {
                if field.is_empty() || ty.is_empty() {
                    return Err(GenerateError::mismatch(name, "field without a name or type"));
                }
                let spec = FieldSpec {
                    name: field.clone(),
                    ty: ty.clone(),
                    is_shared: *is_static,
                };
                if is_participating(&spec) {
                    fields.push(spec);
                }
            }
            MemberInfo::Constructor { param_count: 0 } => declares_empty = true,
            _ => {}
        }
    }

    Ok(ClassFacts {
        name: name.to_string(),
        type_params,
        fields,
        has_user_empty_constructor: declares_empty && !synthetic.is_synthetic(name),
    })
}

/// Entry point a host invokes: synthesizes a builder for every top-level
/// class in a unit and commits the result.
#[derive(Debug, Clone, Default)]
pub struct GeneratorDriver {
    synthesizer: ClassSynthesizer,
}

impl GeneratorDriver {
    pub fn new(options: GeneratorOptions) -> Self {
        Self {
            synthesizer: ClassSynthesizer::with_prefix(options.prefix),
        }
    }

    /// Extract facts for every class declaration without changing anything.
    pub fn facts<W: WorkingCopy>(&self, copy: &mut W) -> Result<Vec<ClassFacts>, GenerateError> {
        let decls = copy.type_decls().map_err(GenerateError::Resolve)?;
        let synthetic = SyntheticConstructors::scan(&decls);
        decls
            .iter()
            .filter(|decl| decl.kind().is_class())
            .map(|decl| extract_facts(decl, &synthetic))
            .collect()
    }

    /// Run one pass. Every class is rewritten exactly once, then all
    /// rewrites are committed together. On error nothing is committed.
    pub fn generate<W: WorkingCopy>(
        &self,
        mut copy: W,
    ) -> Result<GenerationReport<W::Committed>, GenerateError> {
        let decls = copy.type_decls().map_err(GenerateError::Resolve)?;
        let synthetic = SyntheticConstructors::scan(&decls);

        let mut classes = Vec::new();
        let mut diagnostics = Vec::new();

        for decl in &decls {
            let kind = decl.kind();
            if !kind.is_class() {
                debug!(name = decl.simple_name(), %kind, "skipping non-class declaration");
                diagnostics.push(
                    Diagnostic::info(format!("skipped {} declaration", kind))
                        .at(decl.simple_name()),
                );
                continue;
            }

            let facts = extract_facts(decl, &synthetic)?;
            debug!(
                class = %facts.name,
                fields = facts.fields.len(),
                generic = facts.is_generic(),
                has_empty_constructor = facts.has_user_empty_constructor,
                "extracted class facts"
            );

            if has_nested_builder(decl) {
                warn!(class = %facts.name, "class already declares a nested builder");
                diagnostics.push(
                    Diagnostic::warning(format!(
                        "already declares a nested `{}`; another one was added",
                        BUILDER_CLASS_NAME
                    ))
                    .at(&facts.name),
                );
            }
            if facts.fields.is_empty() {
                warn!(class = %facts.name, "class has no instance fields");
                diagnostics.push(
                    Diagnostic::warning("no instance fields; the builder has no setters")
                        .at(&facts.name),
                );
            }

            let plan = self.synthesizer.synthesize(&facts);
            let outcome = ClassOutcome {
                name: facts.name.clone(),
                setters: plan.setter_names().into_iter().map(String::from).collect(),
                added_empty_constructor: plan.empty_constructor.is_some(),
            };

            let modified = plan
                .into_members()
                .into_iter()
                .fold(None, |acc: Option<W::Decl>, member| {
                    Some(copy.add_class_member(acc.as_ref().unwrap_or(decl), member))
                });
            if let Some(modified) = modified {
                copy.rewrite(decl, modified)
                    .map_err(|source| GenerateError::Rewrite {
                        class: facts.name.clone(),
                        source,
                    })?;
            }
            classes.push(outcome);
        }

        let output = copy.commit().map_err(GenerateError::Commit)?;
        info!(
            classes = classes.len(),
            diagnostics = diagnostics.len(),
            "generation pass committed"
        );

        Ok(GenerationReport {
            classes,
            diagnostics,
            output,
        })
    }
}

fn has_nested_builder(decl: &impl ClassView) -> bool {
    decl.members()
        .iter()
        .any(|m| matches!(m, MemberInfo::Type { name } if name == BUILDER_CLASS_NAME))
}
