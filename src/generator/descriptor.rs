//! Entity descriptor: the JSON document every generation call starts from.
//!
//! ```json
//! {
//!   "company": { "lowercase": "acme", "uppercase": "ACME" },
//!   "project": { "lowercase": "demo", "uppercase": "DEMO" },
//!   "packageName": "com.acme.demo",
//!   "table": "user",
//!   "Table": "User",
//!   "fields": [
//!     { "name": "id", "type": "Long", "isId": true, "nullable": false,
//!       "comment": "Identifier", "testValue": "1" }
//!   ]
//! }
//! ```
//!
//! Descriptors are validated once, in [`load_descriptor`]. Templates only ever
//! see an [`EntityDescriptor`] whose required keys are present and non-empty.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;

use super::entity::EntityData;
use super::error::{GenerationError, Result};
use crate::naming::{generate_name_variants, to_kebab_case};

/// Casing variants of an organisation or project name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameVariants {
    /// Used as a directory name in the output tree
    pub lowercase: String,
    #[serde(default)]
    pub uppercase: String,
    #[serde(rename = "PascalCase", default, skip_serializing_if = "String::is_empty")]
    pub pascal_case: String,
}

impl NameVariants {
    /// Variants of a raw, human-entered name
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        let variants = generate_name_variants(raw);
        NameVariants {
            uppercase: variants.lowercase.to_uppercase(),
            lowercase: variants.lowercase,
            pascal_case: variants.pascal_case,
        }
    }
}

/// One attribute of the generated entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// camelCase Java identifier
    #[serde(alias = "nom")]
    pub name: String,
    /// Java type name (`String`, `Long`, `UUID`, ...)
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub ty: String,
    #[serde(default)]
    pub is_id: bool,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub comment: String,
    /// Sample value used in generated examples
    #[serde(default, deserialize_with = "lenient_string")]
    pub test_value: String,
}

// Non-string values are kept out of templates rather than rejected.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// Organisation-level metadata shared by every entity of a project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectMeta {
    pub company: String,
    pub project: String,
    /// Dotted Java package; empty means `com.<company>.<project>`
    pub package: String,
}

/// Full input of the rendering pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDescriptor {
    pub company: NameVariants,
    pub project: NameVariants,
    #[serde(rename = "packageName", alias = "package_name", default)]
    pub package_name: String,
    /// camelCase singular entity name, substituted for `xxx`
    pub table: String,
    /// PascalCase singular entity name, substituted for `Xxx`
    #[serde(rename = "Table")]
    pub entity_name: String,
    #[serde(default)]
    pub tables: String,
    #[serde(rename = "capitalTables", default)]
    pub capital_tables: String,
    /// kebab-case plural REST path segment
    #[serde(default)]
    pub endpoint: String,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl EntityDescriptor {
    /// Attach project metadata to an entity built by [`super::build_entity_data`]
    #[must_use]
    pub fn compose(meta: &ProjectMeta, entity: EntityData) -> Self {
        let mut descriptor = EntityDescriptor {
            company: NameVariants::from_raw(&meta.company),
            project: NameVariants::from_raw(&meta.project),
            package_name: meta.package.trim().to_string(),
            table: entity.table,
            entity_name: entity.entity_name,
            tables: entity.tables,
            capital_tables: entity.capital_tables,
            endpoint: entity.endpoint,
            fields: entity.fields,
        };
        descriptor.fill_derived();
        descriptor
    }

    /// Package name with `.` turned into path segments
    #[must_use]
    pub fn package_segments(&self) -> impl Iterator<Item = &str> {
        self.package_name.split('.').filter(|s| !s.is_empty())
    }

    /// First field flagged `isId`
    #[must_use]
    pub fn id_field(&self) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.is_id)
    }

    fn fill_derived(&mut self) {
        if self.package_name.is_empty() {
            self.package_name =
                format!("com.{}.{}", self.company.lowercase, self.project.lowercase);
        }
        if self.tables.is_empty() {
            self.tables = format!("{}s", self.table);
        }
        if self.capital_tables.is_empty() {
            self.capital_tables = format!("{}s", self.entity_name);
        }
        if self.endpoint.is_empty() {
            self.endpoint = to_kebab_case(&self.entity_name);
        }
    }

    fn missing_key(&self) -> Option<&'static str> {
        [
            ("company.lowercase", &self.company.lowercase),
            ("project.lowercase", &self.project.lowercase),
            ("table", &self.table),
            ("Table", &self.entity_name),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(key, _)| key)
    }
}

/// Read, parse and validate a descriptor file
///
/// # Errors
///
/// [`GenerationError::DescriptorLoad`] when the file cannot be read, is not
/// valid JSON, or has an absent or empty `company.lowercase`,
/// `project.lowercase`, `table` or `Table`.
pub fn load_descriptor(path: &Path) -> Result<EntityDescriptor> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => GenerationError::descriptor_load(path, "file not found"),
        _ => GenerationError::descriptor_load(path, e),
    })?;
    parse_descriptor(&contents).map_err(|reason| GenerationError::descriptor_load(path, reason))
}

/// Parse and validate descriptor JSON held in memory
pub fn parse_descriptor(json: &str) -> std::result::Result<EntityDescriptor, String> {
    let mut descriptor: EntityDescriptor =
        serde_json::from_str(json).map_err(|e| format!("invalid descriptor JSON: {e}"))?;
    if let Some(key) = descriptor.missing_key() {
        return Err(format!("required key `{key}` is missing or empty"));
    }
    descriptor.fill_derived();
    Ok(descriptor)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_fills_derived_keys() {
        let d = parse_descriptor(
            &json!({
                "company": {"lowercase": "acme"},
                "project": {"lowercase": "demo"},
                "table": "freezePeriod",
                "Table": "FreezePeriod",
                "fields": []
            })
            .to_string(),
        )
        .unwrap();
        assert_eq!(d.package_name, "com.acme.demo");
        assert_eq!(d.tables, "freezePeriods");
        assert_eq!(d.capital_tables, "FreezePeriods");
        assert_eq!(d.endpoint, "freeze-periods");
    }

    #[test]
    fn test_parse_accepts_legacy_keys() {
        let d = parse_descriptor(
            &json!({
                "company": {"lowercase": "acme", "uppercase": "ACME"},
                "project": {"lowercase": "demo", "uppercase": "DEMO"},
                "package_name": "org.acme",
                "table": "user",
                "Table": "User",
                "fields": [{"nom": "email", "type": "String"}]
            })
            .to_string(),
        )
        .unwrap();
        assert_eq!(d.package_name, "org.acme");
        assert_eq!(d.fields[0].name, "email");
        assert_eq!(d.package_segments().collect::<Vec<_>>(), ["org", "acme"]);
    }

    #[test]
    fn test_parse_rejects_missing_required_keys() {
        let err = parse_descriptor(
            &json!({
                "company": {"lowercase": "acme"},
                "project": {"lowercase": "demo"},
                "Table": "User"
            })
            .to_string(),
        )
        .unwrap_err();
        assert!(err.contains("table"), "{err}");

        let err = parse_descriptor(
            &json!({
                "company": {"lowercase": ""},
                "project": {"lowercase": "demo"},
                "table": "user",
                "Table": "User"
            })
            .to_string(),
        )
        .unwrap_err();
        assert!(err.contains("company.lowercase"), "{err}");
    }

    #[test]
    fn test_parse_tolerates_odd_field_types() {
        let d = parse_descriptor(
            &json!({
                "company": {"lowercase": "acme"},
                "project": {"lowercase": "demo"},
                "table": "user",
                "Table": "User",
                "fields": [{"name": "age", "type": null, "testValue": 42}]
            })
            .to_string(),
        )
        .unwrap();
        assert_eq!(d.fields[0].ty, "");
        assert_eq!(d.fields[0].test_value, "42");
    }

    #[test]
    fn test_name_variants_from_raw() {
        let v = NameVariants::from_raw("Société Générale");
        assert_eq!(v.lowercase, "societegenerale");
        assert_eq!(v.uppercase, "SOCIETEGENERALE");
        assert_eq!(v.pascal_case, "SocieteGenerale");
    }
}
