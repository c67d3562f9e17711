//! Declarations inside `[[class]]` tables.

use mason_ir::DeclKind;
use serde::Deserialize;
use toml::Spanned;

/// A top-level type declaration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassDef {
    pub name: Spanned<String>,

    #[serde(default)]
    pub kind: DeclKind,

    #[serde(default)]
    pub modifiers: Vec<Spanned<String>>,

    #[serde(default, rename = "type-params")]
    pub type_params: Vec<Spanned<String>>,

    #[serde(default, rename = "field")]
    pub fields: Vec<FieldDef>,

    #[serde(default, rename = "constructor")]
    pub constructors: Vec<ConstructorDef>,

    #[serde(default, rename = "method")]
    pub methods: Vec<MethodDef>,
}

impl ClassDef {
    pub fn name(&self) -> &str {
        self.name.get_ref()
    }

    pub fn modifiers(&self) -> impl Iterator<Item = &str> {
        self.modifiers.iter().map(|m| m.get_ref().as_str())
    }

    pub fn type_params(&self) -> impl Iterator<Item = &str> {
        self.type_params.iter().map(|p| p.get_ref().as_str())
    }
}

/// A field declaration. A `static` field is shared and never gets a setter.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDef {
    pub name: Spanned<String>,

    #[serde(rename = "type")]
    pub ty: Spanned<String>,

    #[serde(default)]
    pub modifiers: Vec<Spanned<String>>,

    /// Initializer expression, copied verbatim.
    #[serde(default)]
    pub init: Option<String>,
}

impl FieldDef {
    pub fn name(&self) -> &str {
        self.name.get_ref()
    }

    pub fn ty(&self) -> &str {
        self.ty.get_ref()
    }

    pub fn modifiers(&self) -> impl Iterator<Item = &str> {
        self.modifiers.iter().map(|m| m.get_ref().as_str())
    }

    pub fn is_static(&self) -> bool {
        self.modifiers().any(|m| m == "static")
    }
}

/// A hand-written constructor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstructorDef {
    #[serde(default)]
    pub modifiers: Vec<Spanned<String>>,

    #[serde(default)]
    pub params: Vec<ParamDef>,

    /// Body statements, copied verbatim (one per line).
    #[serde(default)]
    pub body: String,
}

impl ConstructorDef {
    pub fn modifiers(&self) -> impl Iterator<Item = &str> {
        self.modifiers.iter().map(|m| m.get_ref().as_str())
    }
}

/// A hand-written method.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodDef {
    pub name: Spanned<String>,

    #[serde(default)]
    pub modifiers: Vec<Spanned<String>>,

    #[serde(default = "default_return_type")]
    pub returns: String,

    #[serde(default)]
    pub params: Vec<ParamDef>,

    /// Body statements, copied verbatim. A method without a body is
    /// rendered as a declaration (`abstract` or interface methods).
    #[serde(default)]
    pub body: Option<String>,
}

fn default_return_type() -> String {
    "void".to_string()
}

impl MethodDef {
    pub fn name(&self) -> &str {
        self.name.get_ref()
    }

    pub fn modifiers(&self) -> impl Iterator<Item = &str> {
        self.modifiers.iter().map(|m| m.get_ref().as_str())
    }
}

/// A constructor or method parameter.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamDef {
    pub name: Spanned<String>,

    #[serde(rename = "type")]
    pub ty: String,
}

impl ParamDef {
    pub fn name(&self) -> &str {
        self.name.get_ref()
    }
}
