//! Class facts extracted once per class per generation pass.

use serde::{Deserialize, Serialize};

/// A declared type parameter: a name, optionally followed by its bound
/// (`T`, `T extends Comparable<T>`).
///
/// Declarations go where parameters are introduced (class headers, generic
/// methods); bare names go where they are used as type arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeParamName(String);

impl TypeParamName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The full declaration, bound included.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The bare name, as used in type arguments.
    pub fn name(&self) -> &str {
        self.0.split_whitespace().next().unwrap_or_default()
    }

    /// The text after `extends`, if any.
    pub fn bound(&self) -> Option<&str> {
        let (_, rest) = self.0.trim().split_once(char::is_whitespace)?;
        rest.trim_start()
            .strip_prefix("extends")
            .map(str::trim)
            .filter(|bound| !bound.is_empty())
    }
}

impl std::fmt::Display for TypeParamName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeParamName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TypeParamName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A declared field of the host class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name.
    pub name: String,
    /// Declared type, as written in source (e.g., `List<String>`).
    #[serde(rename = "type")]
    pub ty: String,
    /// Class-level (static) field; never part of the builder.
    pub is_shared: bool,
}

impl FieldSpec {
    /// Create an instance field.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            is_shared: false,
        }
    }

    /// Create a class-level field.
    pub fn shared(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            is_shared: true,
            ..Self::new(name, ty)
        }
    }
}

/// Everything the generator needs to know about one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassFacts {
    /// Simple class name; never empty.
    pub name: String,
    /// Type parameters in declaration order.
    pub type_params: Vec<TypeParamName>,
    /// Fields in declaration order.
    pub fields: Vec<FieldSpec>,
    /// The class already has a hand-written no-argument constructor.
    pub has_user_empty_constructor: bool,
}

impl ClassFacts {
    /// Create facts for a non-generic class with no fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_params: Vec::new(),
            fields: Vec::new(),
            has_user_empty_constructor: false,
        }
    }

    /// Add a type parameter.
    pub fn type_param(mut self, name: impl Into<TypeParamName>) -> Self {
        self.type_params.push(name.into());
        self
    }

    /// Add a field.
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Add multiple fields.
    pub fn fields(mut self, fields: impl IntoIterator<Item = FieldSpec>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Mark the class as already declaring a no-argument constructor.
    pub fn with_user_empty_constructor(mut self, present: bool) -> Self {
        self.has_user_empty_constructor = present;
        self
    }

    /// Check if the class is generic.
    pub fn is_generic(&self) -> bool {
        !self.type_params.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_facts_builder() {
        let facts = ClassFacts::new("Box")
            .type_param("T")
            .field(FieldSpec::new("value", "T"))
            .with_user_empty_constructor(true);

        assert_eq!(facts.name, "Box");
        assert!(facts.is_generic());
        assert_eq!(facts.type_params, vec![TypeParamName::new("T")]);
        assert_eq!(facts.fields.len(), 1);
        assert!(facts.has_user_empty_constructor);
    }

    #[test]
    fn test_field_order_is_preserved() {
        let facts = ClassFacts::new("Person").fields([
            FieldSpec::new("name", "String"),
            FieldSpec::shared("COUNT", "int"),
            FieldSpec::new("age", "int"),
        ]);

        let names: Vec<_> = facts.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["name", "COUNT", "age"]);
        assert!(facts.fields[1].is_shared);
    }

    #[test]
    fn test_type_param_name_and_bound() {
        let plain = TypeParamName::new("T");
        assert_eq!(plain.name(), "T");
        assert_eq!(plain.bound(), None);

        let bounded = TypeParamName::new("T extends Comparable<T>");
        assert_eq!(bounded.name(), "T");
        assert_eq!(bounded.bound(), Some("Comparable<T>"));
        assert_eq!(bounded.as_str(), "T extends Comparable<T>");
    }

    #[test]
    fn test_facts_serialize() {
        let facts = ClassFacts::new("Pair")
            .type_param("K")
            .type_param("V")
            .field(FieldSpec::new("key", "K"));

        let json = serde_json::to_value(&facts).unwrap();
        assert_eq!(json["name"], "Pair");
        assert_eq!(json["type_params"], serde_json::json!(["K", "V"]));
        assert_eq!(json["fields"][0]["type"], "K");
        assert_eq!(json["fields"][0]["is_shared"], false);
    }
}
