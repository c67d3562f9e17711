use mason_codegen::{CodeFragment, Renderable, synthesis::render_type_param_decls};
use mason_ir::{DeclKind, TypeParamName};

use super::{Constructor, Field, Member, Method, Modifiers};

/// A class, interface, enum, record or annotation declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    pub kind: DeclKind,
    pub modifiers: Modifiers,
    pub name: String,
    pub type_params: Vec<TypeParamName>,
    pub members: Vec<Member>,
}

impl TypeDecl {
    pub fn new(kind: DeclKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            modifiers: Modifiers::default(),
            name: name.into(),
            type_params: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(DeclKind::Class, name)
    }

    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn type_param(mut self, name: impl Into<TypeParamName>) -> Self {
        self.type_params.push(name.into());
        self
    }

    pub fn member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn field(self, field: Field) -> Self {
        self.member(Member::Field(field))
    }

    pub fn constructor(self, constructor: Constructor) -> Self {
        self.member(Member::Constructor(constructor))
    }

    pub fn method(self, method: Method) -> Self {
        self.member(Member::Method(method))
    }

    pub fn constructors(&self) -> impl Iterator<Item = &Constructor> {
        self.members.iter().filter_map(|m| match m {
            Member::Constructor(c) => Some(c),
            _ => None,
        })
    }

    /// Drop compiler-supplied members, here and in nested types.
    pub fn strip_synthetic(&mut self) {
        self.members.retain(|m| !m.is_synthetic());
        for member in &mut self.members {
            if let Member::Type(nested) = member {
                nested.strip_synthetic();
            }
        }
    }

    fn keyword(&self) -> &'static str {
        match self.kind {
            DeclKind::Class => "class",
            DeclKind::Interface => "interface",
            DeclKind::Enum => "enum",
            DeclKind::Record => "record",
            DeclKind::Annotation => "@interface",
        }
    }

    /// Record components are the instance fields; they go in the header.
    fn is_component(&self, member: &Member) -> bool {
        self.kind == DeclKind::Record
            && matches!(member, Member::Field(f) if !f.modifiers.is_static())
    }

    fn header(&self) -> String {
        let components = if self.kind == DeclKind::Record {
            let fields: Vec<String> = self
                .members
                .iter()
                .filter(|m| self.is_component(m))
                .filter_map(|m| match m {
                    Member::Field(f) => Some(format!("{} {}", f.ty, f.name)),
                    _ => None,
                })
                .collect();
            format!("({})", fields.join(", "))
        } else {
            String::new()
        };
        format!(
            "{}{} {}{}{} {{",
            self.modifiers.prefix(),
            self.keyword(),
            self.name,
            render_type_param_decls(&self.type_params),
            components
        )
    }

    fn body_fragments(&self) -> Vec<CodeFragment> {
        let mut body = Vec::new();
        let members: Vec<&Member> = self
            .members
            .iter()
            .filter(|m| !m.is_synthetic() && !self.is_component(m))
            .collect();

        if self.kind == DeclKind::Enum && !members.is_empty() {
            body.push(CodeFragment::line(";"));
        }

        // Consecutive fields stay together; everything else is separated.
        let mut previous: Option<&Member> = None;
        for member in members {
            if previous.is_some_and(|p| !(p.is_field() && member.is_field())) {
                body.push(CodeFragment::Blank);
            }
            body.extend(member.to_fragments());
            previous = Some(member);
        }
        body
    }
}

impl Renderable for TypeDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::braced(self.header(), self.body_fragments())]
    }
}
