//! Resolution of a parsed file into the view the generator reads.

use std::collections::HashSet;

use mason_codegen::{ClassView, HostError, MemberInfo};
use mason_ir::{DeclKind, TypeParamName};
use tracing::trace;

use crate::ast::{Constructor, JavaFile, Member, Modifier, Modifiers, TypeDecl};

/// A resolved top-level declaration and its position in the file.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDecl {
    pub(crate) index: usize,
    pub(crate) decl: TypeDecl,
}

impl ResolvedDecl {
    pub fn decl(&self) -> &TypeDecl {
        &self.decl
    }

    pub fn into_decl(self) -> TypeDecl {
        self.decl
    }
}

/// Resolve every top-level declaration in `file`.
///
/// A class that declares no constructor receives the compiler's default
/// one: public, no parameters, marked synthetic.
pub fn resolve(file: &JavaFile) -> Result<Vec<ResolvedDecl>, HostError> {
    let mut seen = HashSet::new();
    file.types
        .iter()
        .enumerate()
        .map(|(index, decl)| {
            if decl.name.is_empty() {
                return Err(HostError::Resolve(format!(
                    "type declaration #{} has no name",
                    index + 1
                )));
            }
            if !seen.insert(decl.name.as_str()) {
                return Err(HostError::Resolve(format!(
                    "type `{}` is declared more than once",
                    decl.name
                )));
            }
            Ok(ResolvedDecl {
                index,
                decl: with_default_constructor(decl.clone()),
            })
        })
        .collect()
}

fn with_default_constructor(mut decl: TypeDecl) -> TypeDecl {
    if decl.kind == DeclKind::Class && decl.constructors().next().is_none() {
        trace!(class = %decl.name, "adding default constructor");
        let default = Constructor::new(&decl.name)
            .modifiers(Modifiers::new([Modifier::Public]))
            .synthetic();
        decl.members.insert(0, Member::Constructor(default));
    }
    decl
}

impl ClassView for ResolvedDecl {
    fn kind(&self) -> DeclKind {
        self.decl.kind
    }

    fn simple_name(&self) -> &str {
        &self.decl.name
    }

    fn type_parameters(&self) -> Vec<TypeParamName> {
        self.decl.type_params.clone()
    }

    fn members(&self) -> Vec<MemberInfo> {
        self.decl
            .members
            .iter()
            .map(|member| match member {
                Member::Field(f) => MemberInfo::Field {
                    name: f.name.clone(),
                    ty: f.ty.clone(),
                    is_static: f.modifiers.is_static(),
                },
                Member::Constructor(c) => MemberInfo::Constructor {
                    param_count: c.params.len(),
                },
                Member::Method(m) => MemberInfo::Method {
                    name: m.name.clone(),
                    param_count: m.params.len(),
                    is_static: m.modifiers.is_static(),
                },
                Member::Type(t) => MemberInfo::Type {
                    name: t.name.clone(),
                },
            })
            .collect()
    }

    fn has_synthetic_constructor(&self) -> bool {
        self.decl.constructors().any(|c| c.synthetic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Field, Param};

    #[test]
    fn test_default_constructor_added() {
        let file = JavaFile::new().add(TypeDecl::class("Person").field(Field::new("age", "int")));
        let decls = resolve(&file).unwrap();

        assert!(decls[0].has_synthetic_constructor());
        assert_eq!(
            decls[0].members()[0],
            MemberInfo::Constructor { param_count: 0 }
        );
    }

    #[test]
    fn test_explicit_constructor_kept() {
        let file = JavaFile::new().add(
            TypeDecl::class("Person")
                .constructor(Constructor::new("Person").param(Param::new("age", "int"))),
        );
        let decls = resolve(&file).unwrap();

        assert!(!decls[0].has_synthetic_constructor());
        assert_eq!(decls[0].members().len(), 1);
    }

    #[test]
    fn test_interfaces_get_no_constructor() {
        let file = JavaFile::new().add(TypeDecl::new(DeclKind::Interface, "Shape"));
        let decls = resolve(&file).unwrap();
        assert!(decls[0].members().is_empty());
        assert!(!decls[0].has_synthetic_constructor());
    }

    #[test]
    fn test_duplicate_type_rejected() {
        let file = JavaFile::new()
            .add(TypeDecl::class("A"))
            .add(TypeDecl::class("A"));
        assert!(matches!(resolve(&file), Err(HostError::Resolve(_))));
    }

    #[test]
    fn test_resolve_leaves_file_untouched() {
        let file = JavaFile::new().add(TypeDecl::class("A"));
        resolve(&file).unwrap();
        assert!(file.types[0].members.is_empty());
    }
}
