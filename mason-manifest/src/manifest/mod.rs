//! Manifest types and parsing for mason.toml files.

mod class;
mod file;
mod parse;
mod validate;

pub use class::{ClassDef, ConstructorDef, FieldDef, MethodDef, ParamDef};
pub use file::MasonToml;
pub use parse::parse_manifest;
use serde::Deserialize;
use toml::Spanned;
pub use validate::{ParseContext, validate_prefix};

/// Setter prefix used when `[generator].prefix` is not set.
pub const DEFAULT_PREFIX: &str = "with";

/// Indent width used when `[generator].indent` is not set.
pub const DEFAULT_INDENT: u8 = 4;

/// Root manifest for mason.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Generator settings
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Compilation unit settings
    #[serde(default)]
    pub unit: UnitConfig,

    /// Top-level type declarations, in source order
    #[serde(default, rename = "class")]
    pub classes: Vec<ClassDef>,
}

impl Manifest {
    /// Find a declaration by name.
    pub fn class(&self, name: &str) -> Option<&ClassDef> {
        self.classes.iter().find(|c| c.name() == name)
    }

    /// File name used when `[unit].output` is not set: `<FirstType>.java`.
    pub fn default_output_name(&self) -> Option<String> {
        self.classes.first().map(|c| format!("{}.java", c.name()))
    }
}

/// The `[generator]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Setter prefix; empty means setters are named after their fields.
    #[serde(default)]
    pub prefix: Option<Spanned<String>>,

    /// Indent width: 2, 4 or 8 spaces, or 0 for a tab.
    #[serde(default)]
    pub indent: Option<Spanned<u8>>,
}

impl GeneratorConfig {
    /// The configured prefix, or [`DEFAULT_PREFIX`].
    pub fn prefix(&self) -> &str {
        self.prefix
            .as_ref()
            .map(|p| p.get_ref().as_str())
            .unwrap_or(DEFAULT_PREFIX)
    }

    /// The configured indent width, or [`DEFAULT_INDENT`].
    pub fn indent_width(&self) -> u8 {
        self.indent
            .as_ref()
            .map(|w| *w.get_ref())
            .unwrap_or(DEFAULT_INDENT)
    }
}

/// The `[unit]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitConfig {
    /// Package declaration, e.g. `com.example.model`.
    #[serde(default)]
    pub package: Option<Spanned<String>>,

    /// Import declarations, e.g. `java.util.List` or `java.util.*`.
    #[serde(default)]
    pub imports: Vec<Spanned<String>>,

    /// Output file, relative to the manifest.
    #[serde(default)]
    pub output: Option<String>,
}

impl UnitConfig {
    pub fn package(&self) -> Option<&str> {
        self.package.as_ref().map(|p| p.get_ref().as_str())
    }

    pub fn imports(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(|i| i.get_ref().as_str())
    }
}
