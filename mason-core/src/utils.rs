//! Shared string helpers for generated identifiers.

/// Uppercase the first character of `s` (e.g., "age" -> "Age").
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first character of `s` (e.g., "Builder" -> "builder").
pub fn uncapitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Join a prefix and a name in camelCase (e.g., "with" + "age" -> "withAge").
///
/// An empty prefix returns `name` unchanged.
pub fn join_camel(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        return name.to_string();
    }
    let mut joined = String::with_capacity(prefix.len() + name.len());
    joined.push_str(prefix);
    joined.push_str(&capitalize_first(name));
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("age"), "Age");
        assert_eq!(capitalize_first("firstName"), "FirstName");
        assert_eq!(capitalize_first("X"), "X");
        assert_eq!(capitalize_first("_id"), "_id");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_uncapitalize_first() {
        assert_eq!(uncapitalize_first("Builder"), "builder");
        assert_eq!(uncapitalize_first("URL"), "uRL");
        assert_eq!(uncapitalize_first(""), "");
    }

    #[test]
    fn test_join_camel() {
        assert_eq!(join_camel("with", "age"), "withAge");
        assert_eq!(join_camel("set", "firstName"), "setFirstName");
        assert_eq!(join_camel("", "age"), "age");
    }
}
