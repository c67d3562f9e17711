//! A [`WorkingCopy`] over a [`JavaFile`].

use std::path::{Path, PathBuf};

use mason_codegen::{HostError, Indent, SynthesizedMember, WorkingCopy};
use mason_core::write_atomic;
use tracing::{debug, info};

use crate::{
    ast::JavaFile,
    lower::lower,
    resolve::{ResolvedDecl, resolve},
};

/// The outcome of a successful commit.
#[derive(Debug, Clone)]
pub struct Committed {
    /// The rewritten unit, without synthetic members.
    pub file: JavaFile,
    /// The rendered source.
    pub source: String,
    /// Where the source was written, if anywhere.
    pub path: Option<PathBuf>,
}

/// An editing session over one Java file.
///
/// Rewrites are queued against the file as it was when the session began;
/// [`commit`](WorkingCopy::commit) applies them all, renders the result and,
/// when a target is set, replaces the target file in one rename.
#[derive(Debug, Clone)]
pub struct JavaWorkingCopy {
    file: JavaFile,
    target: Option<PathBuf>,
    indent: Indent,
    queued: Vec<(usize, ResolvedDecl)>,
}

impl JavaWorkingCopy {
    pub fn new(file: JavaFile) -> Self {
        Self {
            file,
            target: None,
            indent: Indent::JAVA,
            queued: Vec::new(),
        }
    }

    /// Write the committed source to `path`.
    pub fn target(mut self, path: impl Into<PathBuf>) -> Self {
        self.target = Some(path.into());
        self
    }

    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn file(&self) -> &JavaFile {
        &self.file
    }

    pub fn target_path(&self) -> Option<&Path> {
        self.target.as_deref()
    }
}

impl WorkingCopy for JavaWorkingCopy {
    type Decl = ResolvedDecl;
    type Committed = Committed;

    fn type_decls(&mut self) -> Result<Vec<ResolvedDecl>, HostError> {
        let decls = resolve(&self.file)?;
        debug!(types = decls.len(), "resolved compilation unit");
        Ok(decls)
    }

    fn add_class_member(&self, decl: &ResolvedDecl, member: SynthesizedMember) -> ResolvedDecl {
        let mut modified = decl.clone();
        modified.decl.members.push(lower(member));
        modified
    }

    fn rewrite(
        &mut self,
        original: &ResolvedDecl,
        modified: ResolvedDecl,
    ) -> Result<(), HostError> {
        let current = self.file.types.get(original.index);
        if current.is_none_or(|t| t.name != original.decl.name) {
            return Err(HostError::StaleRewrite(original.decl.name.clone()));
        }
        self.queued.retain(|(index, _)| *index != original.index);
        self.queued.push((original.index, modified));
        Ok(())
    }

    fn commit(self) -> Result<Committed, HostError> {
        let mut file = self.file;
        let rewrites = self.queued.len();
        for (index, modified) in self.queued {
            file.types[index] = modified.into_decl();
        }
        for decl in &mut file.types {
            decl.strip_synthetic();
        }

        let source = file.render_with_indent(self.indent);
        if let Some(path) = &self.target {
            write_atomic(path, &source).map_err(|e| {
                HostError::commit_with(format!("failed to write '{}'", path.display()), e)
            })?;
            info!(path = %path.display(), rewrites, "wrote compilation unit");
        } else {
            debug!(rewrites, "committed compilation unit in memory");
        }

        Ok(Committed {
            file,
            source,
            path: self.target,
        })
    }
}
