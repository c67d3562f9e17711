//! Names of synthesized members.

use mason_core::{join_camel, uncapitalize_first};

/// Name of the nested builder type.
pub const BUILDER_CLASS_NAME: &str = "Builder";

/// Name of the static factory on the host class.
pub const FACTORY_METHOD_NAME: &str = "builder";

/// Name of the terminal method on the builder.
pub const BUILD_METHOD_NAME: &str = "build";

/// Setter prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "with";

/// Derive a setter name from a field name and prefix.
///
/// An empty prefix yields the field name unchanged; otherwise the field's
/// first character is upper-cased and appended (`with` + `age` = `withAge`).
pub fn resolve_setter_name(field_name: &str, prefix: &str) -> String {
    join_camel(prefix, field_name)
}

/// Parameter name of the builder-consuming constructor (`builder`).
pub fn builder_param_name() -> String {
    uncapitalize_first(BUILDER_CLASS_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_setter_name() {
        assert_eq!(resolve_setter_name("age", "with"), "withAge");
        assert_eq!(resolve_setter_name("firstName", "set"), "setFirstName");
    }

    #[test]
    fn test_empty_prefix_keeps_field_name() {
        assert_eq!(resolve_setter_name("age", ""), "age");
        assert_eq!(resolve_setter_name("URL", ""), "URL");
    }

    #[test]
    fn test_builder_param_name() {
        assert_eq!(builder_param_name(), "builder");
    }
}
