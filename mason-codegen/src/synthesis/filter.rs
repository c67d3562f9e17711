//! Field participation.

use mason_ir::FieldSpec;

/// Returns true if the field takes part in the builder.
///
/// Shared (class-level) fields never do. Every place that enumerates fields
/// for setters, builder fields or constructor assignments goes through here.
pub fn is_participating(field: &FieldSpec) -> bool {
    !field.is_shared
}

/// Participating fields, in declaration order.
pub fn participating(fields: &[FieldSpec]) -> impl Iterator<Item = &FieldSpec> {
    fields.iter().filter(|field| is_participating(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_field_is_excluded() {
        assert!(is_participating(&FieldSpec::new("name", "String")));
        assert!(!is_participating(&FieldSpec::shared("COUNT", "int")));
    }

    #[test]
    fn test_participating_keeps_order() {
        let fields = [
            FieldSpec::new("b", "int"),
            FieldSpec::shared("X", "int"),
            FieldSpec::new("a", "int"),
        ];
        let names: Vec<_> = participating(&fields).map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
    }
}
