use mason_codegen::{CodeBuilder, Indent};

use super::TypeDecl;

/// A Java compilation unit.
///
/// Rendered in three sections (package, imports, type declarations),
/// separated by blank lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JavaFile {
    pub package: Option<String>,
    pub imports: Vec<String>,
    pub types: Vec<TypeDecl>,
}

impl JavaFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn import(mut self, import: impl Into<String>) -> Self {
        self.imports.push(import.into());
        self
    }

    pub fn add(mut self, decl: TypeDecl) -> Self {
        self.types.push(decl);
        self
    }

    /// Find a top-level declaration by name.
    pub fn find(&self, name: &str) -> Option<&TypeDecl> {
        self.types.iter().find(|t| t.name == name)
    }

    /// Render with Java's default 4-space indentation.
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::JAVA)
    }

    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        if let Some(package) = &self.package {
            builder.push_line(&format!("package {};", package));
        }

        if !self.imports.is_empty() {
            if self.package.is_some() {
                builder.push_blank();
            }
            for import in &self.imports {
                builder.push_line(&format!("import {};", import));
            }
        }

        for (i, decl) in self.types.iter().enumerate() {
            if i > 0 || self.package.is_some() || !self.imports.is_empty() {
                builder.push_blank();
            }
            builder.emit(decl);
        }

        builder.build()
    }
}
