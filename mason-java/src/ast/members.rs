use mason_codegen::{CodeFragment, Renderable};

use super::{Modifiers, TypeDecl};

/// A member of a type declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Field(Field),
    Constructor(Constructor),
    Method(Method),
    Type(TypeDecl),
}

impl Member {
    pub fn is_field(&self) -> bool {
        matches!(self, Self::Field(_))
    }

    /// Compiler-supplied members exist only in a resolved tree.
    pub fn is_synthetic(&self) -> bool {
        matches!(self, Self::Constructor(c) if c.synthetic)
    }
}

impl Renderable for Member {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            Self::Field(field) => field.to_fragments(),
            Self::Constructor(constructor) => constructor.to_fragments(),
            Self::Method(method) => method.to_fragments(),
            Self::Type(decl) => decl.to_fragments(),
        }
    }
}

/// A constructor or method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

fn render_params(params: &[Param]) -> String {
    params
        .iter()
        .map(|p| format!("{} {}", p.ty, p.name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn body_fragments(body: &[String]) -> Vec<CodeFragment> {
    body.iter().map(CodeFragment::line).collect()
}

/// A field declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub modifiers: Modifiers,
    pub ty: String,
    pub name: String,
    pub init: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            modifiers: Modifiers::default(),
            ty: ty.into(),
            name: name.into(),
            init: None,
        }
    }

    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn init(mut self, init: impl Into<String>) -> Self {
        self.init = Some(init.into());
        self
    }
}

impl Renderable for Field {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let init = self
            .init
            .as_ref()
            .map(|i| format!(" = {}", i))
            .unwrap_or_default();
        vec![CodeFragment::Line(format!(
            "{}{} {}{};",
            self.modifiers.prefix(),
            self.ty,
            self.name,
            init
        ))]
    }
}

/// A constructor declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructor {
    pub modifiers: Modifiers,
    /// The declaring class's simple name.
    pub name: String,
    pub params: Vec<Param>,
    /// Body statements, one per line.
    pub body: Vec<String>,
    /// Supplied by resolution, not written in source.
    pub synthetic: bool,
}

impl Constructor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            modifiers: Modifiers::default(),
            name: name.into(),
            params: Vec::new(),
            body: Vec::new(),
            synthetic: false,
        }
    }

    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn body(mut self, body: Vec<String>) -> Self {
        self.body = body;
        self
    }

    pub fn synthetic(mut self) -> Self {
        self.synthetic = true;
        self
    }
}

impl Renderable for Constructor {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::braced(
            format!(
                "{}{}({}) {{",
                self.modifiers.prefix(),
                self.name,
                render_params(&self.params)
            ),
            body_fragments(&self.body),
        )]
    }
}

/// A method declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub modifiers: Modifiers,
    /// Method-level type parameters, rendered before the return type.
    pub type_params: String,
    pub returns: String,
    pub name: String,
    pub params: Vec<Param>,
    /// `None` renders a bodiless declaration.
    pub body: Option<Vec<String>>,
}

impl Method {
    pub fn new(name: impl Into<String>, returns: impl Into<String>) -> Self {
        Self {
            modifiers: Modifiers::default(),
            type_params: String::new(),
            returns: returns.into(),
            name: name.into(),
            params: Vec::new(),
            body: Some(Vec::new()),
        }
    }

    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn type_params(mut self, type_params: impl Into<String>) -> Self {
        self.type_params = type_params.into();
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn params(mut self, params: Vec<Param>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn body(mut self, body: Option<Vec<String>>) -> Self {
        self.body = body;
        self
    }

    fn signature(&self) -> String {
        let type_params = if self.type_params.is_empty() {
            String::new()
        } else {
            format!("{} ", self.type_params)
        };
        format!(
            "{}{}{} {}({})",
            self.modifiers.prefix(),
            type_params,
            self.returns,
            self.name,
            render_params(&self.params)
        )
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match &self.body {
            Some(body) => vec![CodeFragment::braced(
                format!("{} {{", self.signature()),
                body_fragments(body),
            )],
            None => vec![CodeFragment::Line(format!("{};", self.signature()))],
        }
    }
}
