use std::collections::BTreeSet;

use super::descriptor::FieldDescriptor;

/// Imports every generated entity class needs, whatever its fields
pub const COMMON_IMPORTS: &[&str] = &[
    "java.io.Serializable",
    "jakarta.persistence.Entity",
    "jakarta.persistence.Id",
    "jakarta.persistence.GeneratedValue",
    "jakarta.persistence.GenerationType",
    "jakarta.persistence.Column",
    "jakarta.annotation.Nullable",
    "lombok.Data",
    "lombok.NoArgsConstructor",
    "lombok.AllArgsConstructor",
    "lombok.Builder",
];

/// Import required by a field type, for the few types outside `java.lang`
#[must_use]
pub fn type_import(field_type: &str) -> Option<&'static str> {
    match field_type {
        "ZonedDateTime" => Some("java.time.ZonedDateTime"),
        "LocalDate" => Some("java.time.LocalDate"),
        "LocalDateTime" => Some("java.time.LocalDateTime"),
        "UUID" => Some("java.util.UUID"),
        "BigDecimal" => Some("java.math.BigDecimal"),
        "List" => Some("java.util.List"),
        _ => None,
    }
}

/// Imports contributed by the field types alone, sorted and de-duplicated
#[must_use]
pub fn get_type_imports(fields: &[FieldDescriptor]) -> Vec<String> {
    fields
        .iter()
        .filter_map(|f| type_import(f.ty.trim()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Fully-qualified imports for an entity with `fields`
///
/// The common set plus one import per recognised field type, de-duplicated
/// and sorted, so identical input always yields the same import block.
/// Unknown or empty types add nothing.
#[must_use]
pub fn get_required_imports(fields: &[FieldDescriptor]) -> Vec<String> {
    let mut imports: BTreeSet<&str> = COMMON_IMPORTS.iter().copied().collect();
    imports.extend(fields.iter().filter_map(|f| type_import(f.ty.trim())));
    imports.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, ty: &str) -> FieldDescriptor {
        FieldDescriptor {
            name: name.to_string(),
            ty: ty.to_string(),
            ..FieldDescriptor::default()
        }
    }

    fn common_sorted() -> Vec<String> {
        let mut common: Vec<String> = COMMON_IMPORTS.iter().map(|s| s.to_string()).collect();
        common.sort();
        common
    }

    #[test]
    fn test_empty_fields_yield_common_set() {
        assert_eq!(get_required_imports(&[]), common_sorted());
    }

    #[test]
    fn test_special_types_are_added() {
        let fields = vec![
            field("name", "String"),
            field("createdAt", "ZonedDateTime"),
            field("birthDate", "LocalDate"),
            field("uuid", "UUID"),
            field("balance", "BigDecimal"),
        ];
        let imports = get_required_imports(&fields);
        for expected in [
            "java.time.ZonedDateTime",
            "java.time.LocalDate",
            "java.util.UUID",
            "java.math.BigDecimal",
            "java.io.Serializable",
            "lombok.Data",
        ] {
            assert!(imports.iter().any(|i| i == expected), "missing {expected}");
        }
        let mut sorted = imports.clone();
        sorted.sort();
        assert_eq!(imports, sorted);
    }

    #[test]
    fn test_basic_types_add_nothing() {
        let fields = vec![
            field("name", "String"),
            field("id", "Long"),
            field("active", "Boolean"),
        ];
        assert_eq!(get_required_imports(&fields), common_sorted());
    }

    #[test]
    fn test_duplicates_collapse_and_order_is_irrelevant() {
        let a = vec![
            field("start", "LocalDate"),
            field("id", "UUID"),
            field("end", "LocalDate"),
        ];
        let mut b = a.clone();
        b.reverse();
        let imports = get_required_imports(&a);
        assert_eq!(imports, get_required_imports(&b));
        assert_eq!(
            imports.iter().filter(|i| *i == "java.time.LocalDate").count(),
            1
        );
    }

    #[test]
    fn test_type_imports_exclude_common_set() {
        let fields = vec![field("at", "LocalDateTime"), field("id", "UUID"), field("n", "String")];
        assert_eq!(
            get_type_imports(&fields),
            ["java.time.LocalDateTime", "java.util.UUID"]
        );
        assert!(get_type_imports(&[]).is_empty());
    }

    #[test]
    fn test_unknown_and_blank_types_are_ignored() {
        let fields = vec![field("x", "Widget"), field("y", ""), field("z", "uuid")];
        assert_eq!(get_required_imports(&fields), common_sorted());
    }
}
