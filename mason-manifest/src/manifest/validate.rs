//! Validation context and Java naming rules for manifest parsing.

use std::{collections::HashMap, sync::Arc};

use miette::SourceSpan;
use toml::Spanned;

use super::{ClassDef, GeneratorConfig, Manifest, ParamDef, UnitConfig};
use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the manifest hierarchy, making it easier to pass validation
/// context through nested declarations.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "mason.toml");
/// ctx.validate_name(&class.name, "class")?;
///
/// let nested = ctx.push("Person");
/// nested.validate_name(&field.name, "field")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["Person", "greet"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "field in 'Person'" or just "class" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Validate that a name is a usable Java identifier.
    pub fn validate_name(&self, name: &Spanned<String>, kind: &str) -> Result<()> {
        self.check_identifier(name.get_ref(), kind, span_of(name))
    }

    /// Validate a type parameter: a name, optionally `extends` a bound.
    pub fn validate_type_param(&self, param: &Spanned<String>) -> Result<()> {
        let value = param.get_ref().trim();
        let (name, rest) = match value.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, Some(rest)),
            None => (value, None),
        };
        self.check_identifier(name, "type parameter", span_of(param))?;

        if let Some(rest) = rest {
            let bound = rest
                .trim_start()
                .strip_prefix("extends")
                .filter(|b| b.starts_with(char::is_whitespace))
                .map(str::trim)
                .unwrap_or_default();
            if bound.is_empty() {
                return Err(self.source.validation_error_at(
                    format!(
                        "type parameter '{}' must be a name or 'name extends Bound'",
                        value
                    ),
                    span_of(param),
                ));
            }
        }
        Ok(())
    }

    fn check_identifier(&self, value: &str, kind: &str, span: SourceSpan) -> Result<()> {
        if is_java_keyword(value) {
            return Err(self
                .source
                .reserved_keyword_error(value, self.context_for(kind), span));
        }

        if let Some(reason) = validate_identifier(value) {
            return Err(self.source.invalid_identifier_error(
                value,
                self.context_for(kind),
                reason,
                span,
            ));
        }

        Ok(())
    }

    /// Validate every modifier against the set allowed for `kind`.
    pub fn validate_modifiers(
        &self,
        modifiers: &[Spanned<String>],
        allowed: &[&str],
        kind: &str,
    ) -> Result<()> {
        match modifiers.iter().find(|m| !allowed.contains(&m.get_ref().as_str())) {
            Some(unknown) => Err(self.source.unknown_modifier_error(
                unknown.get_ref(),
                self.context_for(kind),
                allowed,
                span_of(unknown),
            )),
            None => Ok(()),
        }
    }

    /// Reject a second definition of the same name.
    fn validate_unique<'n>(
        &self,
        names: impl IntoIterator<Item = &'n Spanned<String>>,
        kind: &str,
    ) -> Result<()> {
        self.validate_unique_by(names.into_iter().map(|n| (n.get_ref().as_str(), n)), kind)
    }

    /// Like `validate_unique`, keyed by a part of each value.
    fn validate_unique_by<'n>(
        &self,
        entries: impl IntoIterator<Item = (&'n str, &'n Spanned<String>)>,
        kind: &str,
    ) -> Result<()> {
        let mut seen: HashMap<&str, &Spanned<String>> = HashMap::new();
        for (key, name) in entries {
            if let Some(first) = seen.insert(key, name) {
                return Err(self.source.duplicate_error(
                    kind,
                    key,
                    span_of(first),
                    span_of(name),
                ));
            }
        }
        Ok(())
    }
}

/// Convert a toml span into a miette span.
pub(crate) fn span_of<T>(value: &Spanned<T>) -> SourceSpan {
    let range = value.span();
    (range.start, range.end - range.start).into()
}

const CLASS_MODIFIERS: &[&str] = &[
    "public", "protected", "private", "abstract", "static", "final", "strictfp",
];
const FIELD_MODIFIERS: &[&str] = &[
    "public", "protected", "private", "static", "final", "transient", "volatile",
];
const CONSTRUCTOR_MODIFIERS: &[&str] = &["public", "protected", "private"];
const METHOD_MODIFIERS: &[&str] = &[
    "public", "protected", "private", "abstract", "static", "final", "synchronized", "native",
    "strictfp", "default",
];

/// Java reserved words, including the literals `true`, `false` and `null`.
pub(crate) const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while", "true", "false", "null", "_",
];

/// Check if a name is a Java reserved word
pub(crate) fn is_java_keyword(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

/// Validate the characters of a Java identifier.
/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        Some(_) => return Some("name must start with a letter, '_' or '$'"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_alphanumeric() || c == '_' || c == '$')) {
        return Some("name must contain only letters, digits, '_' and '$'");
    }

    None
}

/// Validate a dotted name such as a package or import.
fn validate_qualified(name: &str, allow_wildcard: bool) -> Option<&'static str> {
    let segments: Vec<&str> = name.split('.').collect();
    let last = segments.len() - 1;
    for (i, segment) in segments.iter().enumerate() {
        if allow_wildcard && i == last && i > 0 && *segment == "*" {
            continue;
        }
        if is_java_keyword(segment) {
            return Some("segment is a Java reserved word");
        }
        if let Some(reason) = validate_identifier(segment) {
            return Some(reason);
        }
    }
    None
}

/// Validate the manifest after parsing.
pub(crate) fn validate_manifest(manifest: &Manifest, ctx: &ParseContext) -> Result<()> {
    validate_generator(&manifest.generator, ctx)?;
    validate_unit(&manifest.unit, ctx)?;

    ctx.validate_unique(manifest.classes.iter().map(|c| &c.name), "class")?;
    for class in &manifest.classes {
        ctx.validate_name(&class.name, "class")?;
        validate_class(class, &ctx.push(class.name()))?;
    }
    Ok(())
}

/// Check a setter prefix: empty, or the start of a Java identifier.
///
/// Returns `None` if valid, `Some(reason)` if not.
pub fn validate_prefix(prefix: &str) -> Option<&'static str> {
    if prefix.is_empty() || validate_identifier(prefix).is_none() {
        None
    } else {
        Some("prefix must be empty or start a valid Java identifier")
    }
}

fn validate_generator(generator: &GeneratorConfig, ctx: &ParseContext) -> Result<()> {
    if let Some(prefix) = &generator.prefix {
        if let Some(reason) = validate_prefix(prefix.get_ref()) {
            return Err(ctx
                .source_context()
                .validation_error_at(reason, span_of(prefix)));
        }
    }

    if let Some(indent) = &generator.indent {
        if !matches!(indent.get_ref(), 0 | 2 | 4 | 8) {
            return Err(ctx.source_context().validation_error_at(
                "indent must be 2, 4, 8, or 0 for tabs",
                span_of(indent),
            ));
        }
    }
    Ok(())
}

fn validate_unit(unit: &UnitConfig, ctx: &ParseContext) -> Result<()> {
    if let Some(package) = &unit.package {
        if let Some(reason) = validate_qualified(package.get_ref(), false) {
            return Err(ctx.source_context().validation_error_at(
                format!("invalid package name: {}", reason),
                span_of(package),
            ));
        }
    }

    for import in &unit.imports {
        let name = import
            .get_ref()
            .strip_prefix("static ")
            .unwrap_or(import.get_ref());
        if let Some(reason) = validate_qualified(name, true) {
            return Err(ctx
                .source_context()
                .validation_error_at(format!("invalid import: {}", reason), span_of(import)));
        }
    }
    Ok(())
}

fn validate_class(class: &ClassDef, ctx: &ParseContext) -> Result<()> {
    ctx.validate_modifiers(&class.modifiers, CLASS_MODIFIERS, "class")?;

    for param in &class.type_params {
        ctx.validate_type_param(param)?;
    }
    ctx.validate_unique_by(
        class.type_params.iter().map(|p| {
            let name = p.get_ref().split_whitespace().next().unwrap_or_default();
            (name, p)
        }),
        "type parameter",
    )?;

    for field in &class.fields {
        ctx.validate_name(&field.name, "field")?;
        ctx.validate_modifiers(&field.modifiers, FIELD_MODIFIERS, "field")?;
        if field.ty().trim().is_empty() {
            return Err(ctx
                .source_context()
                .validation_error_at("field type cannot be empty", span_of(&field.ty)));
        }
    }
    ctx.validate_unique(class.fields.iter().map(|f| &f.name), "field")?;

    for constructor in &class.constructors {
        if !class.kind.is_class() {
            return Err(ctx.source_context().validation_error_at(
                format!("{} declarations cannot have constructors", class.kind),
                span_of(&class.name),
            ));
        }
        ctx.validate_modifiers(&constructor.modifiers, CONSTRUCTOR_MODIFIERS, "constructor")?;
        validate_params(&constructor.params, &ctx.push("<init>"))?;
    }

    for method in &class.methods {
        ctx.validate_name(&method.name, "method")?;
        ctx.validate_modifiers(&method.modifiers, METHOD_MODIFIERS, "method")?;
        validate_params(&method.params, &ctx.push(method.name()))?;
    }

    Ok(())
}

fn validate_params(params: &[ParamDef], ctx: &ParseContext) -> Result<()> {
    for param in params {
        ctx.validate_name(&param.name, "parameter")?;
    }
    ctx.validate_unique(params.iter().map(|p| &p.name), "parameter")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("name").is_none());
        assert!(validate_identifier("firstName").is_none());
        assert!(validate_identifier("_private").is_none());
        assert!(validate_identifier("$proxy").is_none());
        assert!(validate_identifier("field2").is_none());
        assert!(validate_identifier("Größe").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("2fast").is_some());
        assert!(validate_identifier("first-name").is_some());
        assert!(validate_identifier("a b").is_some());
        assert!(validate_identifier("a.b").is_some());
    }

    #[test]
    fn test_is_java_keyword() {
        assert!(is_java_keyword("class"));
        assert!(is_java_keyword("int"));
        assert!(is_java_keyword("null"));
        assert!(!is_java_keyword("var"));
        assert!(!is_java_keyword("record"));
        assert!(!is_java_keyword("name"));
    }

    #[test]
    fn test_validate_qualified() {
        assert!(validate_qualified("com.example", false).is_none());
        assert!(validate_qualified("java.util.*", true).is_none());
        assert!(validate_qualified("java.util.*", false).is_some());
        assert!(validate_qualified("*", true).is_some());
        assert!(validate_qualified("com.new.api", false).is_some());
        assert!(validate_qualified("com..example", false).is_some());
    }

    #[test]
    fn test_parse_context_push() {
        let ctx = ParseContext::new("", "mason.toml");
        let nested = ctx.push("Person").push("greet");
        assert_eq!(nested.path_string(), "Person.greet");
        assert_eq!(ctx.context_for("class"), "class");
        assert_eq!(nested.context_for("parameter"), "parameter in 'Person.greet'");
    }
}
