//! In-memory host for driver tests.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use mason_ir::{DeclKind, TypeParamName};

use crate::host::{ClassView, HostError, MemberInfo, SynthesizedMember, WorkingCopy};

/// A declaration held in memory, plus whatever a pass appended to it.
#[derive(Debug, Clone, PartialEq)]
pub struct FakeClass {
    pub kind: DeclKind,
    pub name: String,
    pub type_params: Vec<TypeParamName>,
    pub members: Vec<MemberInfo>,
    pub synthetic_constructor: bool,
    /// Members added through [`WorkingCopy::add_class_member`].
    pub added: Vec<SynthesizedMember>,
}

impl FakeClass {
    pub fn new(kind: DeclKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            type_params: Vec::new(),
            members: Vec::new(),
            synthetic_constructor: false,
            added: Vec::new(),
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(DeclKind::Class, name)
    }

    pub fn type_param(mut self, name: &str) -> Self {
        self.type_params.push(TypeParamName::new(name));
        self
    }

    pub fn field(self, name: &str, ty: &str) -> Self {
        self.member(MemberInfo::Field {
            name: name.into(),
            ty: ty.into(),
            is_static: false,
        })
    }

    pub fn static_field(self, name: &str, ty: &str) -> Self {
        self.member(MemberInfo::Field {
            name: name.into(),
            ty: ty.into(),
            is_static: true,
        })
    }

    pub fn constructor(self, param_count: usize) -> Self {
        self.member(MemberInfo::Constructor { param_count })
    }

    pub fn nested(self, name: &str) -> Self {
        self.member(MemberInfo::Type { name: name.into() })
    }

    /// Mark the class's no-arg constructor as compiler-supplied.
    pub fn synthetic(mut self) -> Self {
        self.synthetic_constructor = true;
        self
    }

    pub fn member(mut self, member: MemberInfo) -> Self {
        self.members.push(member);
        self
    }
}

impl ClassView for FakeClass {
    fn kind(&self) -> DeclKind {
        self.kind
    }

    fn simple_name(&self) -> &str {
        &self.name
    }

    fn type_parameters(&self) -> Vec<TypeParamName> {
        self.type_params.clone()
    }

    fn members(&self) -> Vec<MemberInfo> {
        let added = self.added.iter().map(|member| match member {
            SynthesizedMember::Method(spec) if spec.is_constructor() => MemberInfo::Constructor {
                param_count: spec.params.len(),
            },
            SynthesizedMember::Method(spec) => MemberInfo::Method {
                name: spec.name.clone(),
                param_count: spec.params.len(),
                is_static: spec.modifiers.is_static,
            },
            SynthesizedMember::Builder(class) => MemberInfo::Type {
                name: class.name.clone(),
            },
        });
        self.members.iter().cloned().chain(added).collect()
    }

    fn has_synthetic_constructor(&self) -> bool {
        self.synthetic_constructor
    }
}

/// An in-memory compilation unit.
///
/// Commit yields the rewritten declarations in the order they were queued.
#[derive(Debug, Default)]
pub struct FakeUnit {
    decls: Vec<FakeClass>,
    queued: Vec<FakeClass>,
    fail_resolve: bool,
    fail_rewrite: bool,
    fail_commit: bool,
}

impl FakeUnit {
    pub fn new(decls: impl IntoIterator<Item = FakeClass>) -> Self {
        Self {
            decls: decls.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Make [`WorkingCopy::type_decls`] fail.
    pub fn fail_resolve(mut self) -> Self {
        self.fail_resolve = true;
        self
    }

    /// Make [`WorkingCopy::rewrite`] treat every declaration as stale.
    pub fn fail_rewrite(mut self) -> Self {
        self.fail_rewrite = true;
        self
    }

    /// Make [`WorkingCopy::commit`] fail.
    pub fn fail_commit(mut self) -> Self {
        self.fail_commit = true;
        self
    }
}

impl WorkingCopy for FakeUnit {
    type Decl = FakeClass;
    type Committed = Vec<FakeClass>;

    fn type_decls(&mut self) -> Result<Vec<FakeClass>, HostError> {
        if self.fail_resolve {
            return Err(HostError::Resolve("unit is not resolvable".into()));
        }
        Ok(self.decls.clone())
    }

    fn add_class_member(&self, decl: &FakeClass, member: SynthesizedMember) -> FakeClass {
        let mut modified = decl.clone();
        modified.added.push(member);
        modified
    }

    fn rewrite(&mut self, original: &FakeClass, modified: FakeClass) -> Result<(), HostError> {
        if self.fail_rewrite || !self.decls.iter().any(|d| d.name == original.name) {
            return Err(HostError::StaleRewrite(original.name.clone()));
        }
        self.queued.push(modified);
        Ok(())
    }

    fn commit(self) -> Result<Vec<FakeClass>, HostError> {
        if self.fail_commit {
            return Err(HostError::commit("simulated commit failure"));
        }
        Ok(self.queued)
    }
}
