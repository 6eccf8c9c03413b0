use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::descriptor::FieldDescriptor;
use super::error::{GenerationError, Result};
use crate::naming::{to_camel_case, to_kebab_case, to_pascal_case};

/// One row of user input, before normalisation
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawFieldInput {
    #[serde(alias = "nom")]
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub comment: String,
    pub test_value: String,
    pub is_id: bool,
    pub nullable: bool,
}

impl RawFieldInput {
    /// Parse the compact `name:Type[:flag,flag]` form, flags being `id` and `nullable`
    pub fn parse_spec(spec: &str) -> std::result::Result<Self, String> {
        let mut parts = spec.splitn(3, ':');
        let name = parts.next().unwrap_or_default();
        let ty = parts
            .next()
            .ok_or_else(|| format!("field `{spec}` has no type (expected name:Type)"))?;
        let mut field = RawFieldInput {
            name: name.to_string(),
            ty: ty.to_string(),
            ..RawFieldInput::default()
        };
        for flag in parts.next().unwrap_or_default().split(',').map(str::trim) {
            match flag {
                "" => {}
                "id" => field.is_id = true,
                "nullable" => field.nullable = true,
                other => return Err(format!("unknown flag `{other}` in field `{spec}`")),
            }
        }
        Ok(field)
    }
}

/// Entity part of a descriptor, before project metadata is attached
///
/// Also readable from a composed descriptor file: project keys are ignored
/// and absent derived keys are filled by [`EntityData::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityData {
    #[serde(rename = "Table")]
    pub entity_name: String,
    pub table: String,
    #[serde(default)]
    pub tables: String,
    #[serde(rename = "capitalTables", default)]
    pub capital_tables: String,
    #[serde(rename = "camelTable", default)]
    pub camel_table: String,
    #[serde(default)]
    pub endpoint: String,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl EntityData {
    /// Parse entity JSON, as written by [`save_entity_json`] either before or
    /// after project metadata was attached
    pub fn parse(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let mut data: EntityData = serde_json::from_str(json)?;
        data.fill_derived();
        Ok(data)
    }

    fn fill_derived(&mut self) {
        if self.camel_table.is_empty() {
            self.camel_table = self.table.clone();
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
}

/// Normalise an entity name and its raw field rows
///
/// Rows whose name cleans down to nothing are dropped without error; they are
/// the blank rows of an input form. Each drop is logged at `warn`.
#[must_use]
pub fn build_entity_data(entity_name: &str, raw_fields: &[RawFieldInput]) -> EntityData {
    let pascal = to_pascal_case(entity_name);
    let camel = to_camel_case(entity_name);
    let tables = format!("{camel}s");

    let mut fields = Vec::with_capacity(raw_fields.len());
    for (row, raw) in raw_fields.iter().enumerate() {
        let name = to_camel_case(&raw.name);
        if name.is_empty() {
            warn!(entity = %pascal, row, "dropping field row with an empty name");
            continue;
        }
        fields.push(FieldDescriptor {
            name,
            ty: raw.ty.trim().to_string(),
            is_id: raw.is_id,
            nullable: raw.nullable,
            comment: raw.comment.trim().to_string(),
            test_value: raw.test_value.trim().to_string(),
        });
    }

    EntityData {
        capital_tables: format!("{pascal}s"),
        endpoint: to_kebab_case(&pascal),
        camel_table: camel.clone(),
        table: camel,
        tables,
        entity_name: pascal,
        fields,
    }
}

/// Write `data` to `<output_dir>/<entity_name>.json`, replacing any existing file
///
/// Output is indented by four spaces and keeps non-ASCII characters as-is.
///
/// # Errors
///
/// [`GenerationError::IoWrite`] if the directory cannot be created or the file written.
pub fn save_entity_json<T: Serialize>(
    entity_name: &str,
    data: &T,
    output_dir: &Path,
) -> Result<PathBuf> {
    let path = output_dir.join(format!("{entity_name}.json"));
    let io_err = |source| GenerationError::IoWrite {
        path: path.clone(),
        template: None,
        source,
    };
    fs::create_dir_all(output_dir).map_err(io_err)?;

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    data.serialize(&mut ser)
        .map_err(|e| io_err(std::io::Error::other(e)))?;
    fs::write(&path, buf).map_err(io_err)?;

    info!(path = %path.display(), "entity JSON saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    fn raw(name: &str, ty: &str) -> RawFieldInput {
        RawFieldInput {
            name: name.to_string(),
            ty: ty.to_string(),
            ..RawFieldInput::default()
        }
    }

    #[test]
    fn test_build_entity_data() {
        let mut nom = raw("nom", "String");
        nom.comment = "Nom de l'utilisateur ".to_string();
        nom.test_value = " Jean".to_string();
        let data = build_entity_data("User", &[nom]);
        assert_eq!(data.entity_name, "User");
        assert_eq!(data.table, "user");
        assert_eq!(data.camel_table, "user");
        assert_eq!(data.tables, "users");
        assert_eq!(data.capital_tables, "Users");
        assert_eq!(data.endpoint, "users");
        assert_eq!(data.fields.len(), 1);
        assert_eq!(data.fields[0].name, "nom");
        assert_eq!(data.fields[0].ty, "String");
        assert_eq!(data.fields[0].comment, "Nom de l'utilisateur");
        assert_eq!(data.fields[0].test_value, "Jean");
        assert!(!data.fields[0].is_id);
    }

    #[test]
    fn test_build_entity_data_multi_word_name() {
        let data = build_entity_data("période de gel", &[raw("date début", "LocalDate")]);
        assert_eq!(data.entity_name, "PeriodeDeGel");
        assert_eq!(data.table, "periodeDeGel");
        assert_eq!(data.endpoint, "periode-de-gels");
        assert_eq!(data.fields[0].name, "dateDebut");
    }

    #[test]
    fn test_blank_rows_are_dropped() {
        let data = build_entity_data(
            "Order",
            &[raw("", "String"), raw("  ", "Long"), raw("?!", "Long"), raw("total", "BigDecimal")],
        );
        assert_eq!(data.fields.len(), 1);
        assert_eq!(data.fields[0].name, "total");
    }

    #[test]
    fn test_parse_spec() {
        let f = RawFieldInput::parse_spec("id:Long:id").unwrap();
        assert_eq!((f.name.as_str(), f.ty.as_str(), f.is_id, f.nullable), ("id", "Long", true, false));

        let f = RawFieldInput::parse_spec("endDate:LocalDate:nullable, id").unwrap();
        assert!(f.is_id && f.nullable);

        assert!(RawFieldInput::parse_spec("name").is_err());
        assert!(RawFieldInput::parse_spec("name:String:unique").is_err());
    }

    #[test]
    fn test_entity_data_reads_composed_descriptor() {
        let json = serde_json::json!({
            "company": {"lowercase": "acme", "uppercase": "ACME"},
            "project": {"lowercase": "shop", "uppercase": "SHOP"},
            "packageName": "com.acme.shop",
            "table": "orderLine",
            "Table": "OrderLine",
            "tables": "orderLines",
            "capitalTables": "OrderLines",
            "endpoint": "order-lines",
            "fields": [{"name": "id", "type": "Long", "isId": true}]
        });
        let data = EntityData::parse(&json.to_string()).unwrap();
        let expected = build_entity_data("order line", &[RawFieldInput::parse_spec("id:Long:id").unwrap()]);
        assert_eq!(data, expected);
    }

    #[test]
    fn test_entity_data_parse_fills_missing_keys() {
        let data = EntityData::parse(r#"{"table": "user", "Table": "User"}"#).unwrap();
        assert_eq!(data.camel_table, "user");
        assert_eq!(data.tables, "users");
        assert_eq!(data.capital_tables, "Users");
        assert_eq!(data.endpoint, "users");
        assert!(data.fields.is_empty());
    }

    #[test]
    fn test_save_entity_json() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested");
        let data = serde_json::json!({"test": 123, "label": "Élément"});
        let path = save_entity_json("Test", &data, &out).unwrap();
        assert_eq!(path, out.join("Test.json"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("    \"test\": 123"), "{content}");
        assert!(content.contains("Élément"));

        // Overwrites unconditionally
        save_entity_json("Test", &serde_json::json!({"test": 456}), &out).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("456") && !content.contains("123"));
    }
}
