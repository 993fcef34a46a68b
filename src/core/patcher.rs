//! The three phases of a patch run as plain functions.
//!
//! [`transform`] is pure. [`load`] and [`persist`] go through a [`Storage`];
//! the `_with` variants take one explicitly, the short forms use
//! [`LocalStorage`].

use crate::adapters::storage::LocalStorage;
use crate::config::{backup_path_for, WriteMode};
use crate::domain::model::{PersistOutcome, Record, SubregionUpdate, TransformResult};
use crate::domain::ports::Storage;
use crate::domain::subregions::{canonical_subregion, PLACEHOLDER};
use crate::utils::error::{PatchError, Result};
use serde_json::Value;
use std::path::Path;

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parses a JSON array of objects. `path` is only used for error context.
pub fn parse_collection(path: &Path, bytes: &[u8]) -> Result<Vec<Record>> {
    let parse_err = |message: String| PatchError::Parse {
        path: path.to_path_buf(),
        message,
    };

    let document: Value =
        serde_json::from_slice(bytes).map_err(|e| parse_err(format!("invalid JSON: {}", e)))?;

    let items = match document {
        Value::Array(items) => items,
        other => {
            return Err(parse_err(format!(
                "expected a top-level array, found {}",
                json_type(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(data) => Ok(Record::new(data)),
            other => Err(parse_err(format!(
                "element {} is {}, expected an object",
                index,
                json_type(&other)
            ))),
        })
        .collect()
}

/// Pretty JSON with 2-space indentation; non-ASCII text is written as-is.
pub fn render_collection(records: &[Record]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(records)?)
}

pub fn load_with<S: Storage>(storage: &S, path: &Path) -> Result<Vec<Record>> {
    let bytes = storage.read_file(path)?;
    tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());
    parse_collection(path, &bytes)
}

pub fn load(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    load_with(&LocalStorage::new(), path.as_ref())
}

fn patch_record(record: &mut Record) -> Option<SubregionUpdate> {
    let name = record.name()?;
    if record.subregion()? != PLACEHOLDER {
        return None;
    }
    let subregion = canonical_subregion(name)?;

    let update = SubregionUpdate {
        name: name.to_string(),
        from: PLACEHOLDER.to_string(),
        to: subregion.to_string(),
    };
    record.set_subregion(subregion);
    Some(update)
}

/// Replaces the placeholder subregion of every record whose name is in the
/// lookup table. Records missing either field, or holding a non-string value,
/// pass through untouched. Order is preserved.
pub fn transform(records: Vec<Record>) -> TransformResult {
    let mut updates = Vec::new();
    let records = records
        .into_iter()
        .map(|mut record| {
            if let Some(update) = patch_record(&mut record) {
                updates.push(update);
            }
            record
        })
        .collect();

    TransformResult { records, updates }
}

pub fn persist_with<S: Storage>(
    storage: &S,
    path: &Path,
    records: &[Record],
    mode: WriteMode,
) -> Result<PersistOutcome> {
    let backup_path = backup_path_for(path);
    let data = render_collection(records)?;

    match mode {
        WriteMode::Atomic => storage.replace_file(path, &backup_path, &data)?,
        WriteMode::Direct => {
            storage.backup_file(path, &backup_path)?;
            storage.write_file(path, &data)?;
        }
    }

    Ok(PersistOutcome {
        output_path: path.to_path_buf(),
        backup_path,
        bytes_written: data.len(),
    })
}

pub fn persist(path: impl AsRef<Path>, records: &[Record], mode: WriteMode) -> Result<PersistOutcome> {
    persist_with(&LocalStorage::new(), path.as_ref(), records, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(value: Value) -> Vec<Record> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_transform_chad_and_france() {
        let input = records(json!([
            {"name": "Chad", "subregion": "Other"},
            {"name": "France", "subregion": "Western Europe"}
        ]));

        let (output, count) = transform(input).into_parts();

        assert_eq!(count, 1);
        assert_eq!(
            output,
            records(json!([
                {"name": "Chad", "subregion": "Middle Africa"},
                {"name": "France", "subregion": "Western Europe"}
            ]))
        );
    }

    #[test]
    fn test_transform_reports_each_update() {
        let input = records(json!([
            {"name": "Peru", "subregion": "Other"},
            {"name": "Japan", "subregion": "Other"}
        ]));

        let result = transform(input);

        assert_eq!(
            result.updates,
            vec![
                SubregionUpdate {
                    name: "Peru".to_string(),
                    from: "Other".to_string(),
                    to: "South America".to_string(),
                },
                SubregionUpdate {
                    name: "Japan".to_string(),
                    from: "Other".to_string(),
                    to: "Eastern Asia".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_unknown_name_is_left_alone() {
        let input = records(json!([{"name": "Narnia", "subregion": "Other"}]));
        let result = transform(input.clone());
        assert_eq!(result.updated_count(), 0);
        assert_eq!(result.records, input);
    }

    #[test]
    fn test_only_exact_placeholder_matches() {
        let input = records(json!([
            {"name": "Chad", "subregion": "other"},
            {"name": "Chad", "subregion": "Other "},
            {"name": "chad", "subregion": "Other"},
            {"name": "Kenya", "subregion": "Eastern Africa"}
        ]));
        let result = transform(input.clone());
        assert_eq!(result.updated_count(), 0);
        assert_eq!(result.records, input);
    }

    #[test]
    fn test_missing_or_non_string_fields_are_skipped() {
        let input = records(json!([
            {"subregion": "Other"},
            {"name": "Chad"},
            {"name": null, "subregion": "Other"},
            {"name": "Chad", "subregion": 7},
            {"name": ["Chad"], "subregion": "Other"},
            {}
        ]));
        let result = transform(input.clone());
        assert_eq!(result.updated_count(), 0);
        assert_eq!(result.records, input);
    }

    #[test]
    fn test_other_fields_and_order_survive() {
        let input = records(json!([
            {"id": 3, "name": "Nepal", "subregion": "Other", "flag": "🇳🇵", "area": 147516.0},
            {"id": 1, "name": "Narnia", "subregion": "Other"},
            {"id": 2, "name": "Malta", "subregion": "Other", "tags": ["island", {"eu": true}]}
        ]));

        let result = transform(input);

        let ids: Vec<i64> = result
            .records
            .iter()
            .map(|r| r.data["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);

        let nepal = &result.records[0];
        let keys: Vec<&str> = nepal.data.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["id", "name", "subregion", "flag", "area"]);
        assert_eq!(nepal.subregion(), Some("South Asia"));
        assert_eq!(nepal.data["flag"], json!("🇳🇵"));
        assert_eq!(result.records[2].data["tags"], json!(["island", {"eu": true}]));
        assert_eq!(result.updated_count(), 2);
    }

    #[test]
    fn test_transform_empty_collection() {
        let result = transform(Vec::new());
        assert!(result.records.is_empty());
        assert_eq!(result.updated_count(), 0);
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_collection(Path::new("c.json"), br#"{"name": "Chad"}"#).unwrap_err();
        match err {
            PatchError::Parse { message, .. } => assert!(message.contains("found object")),
            other => panic!("expected Parse, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_non_object_element() {
        let err = parse_collection(Path::new("c.json"), br#"[{"name": "Chad"}, "Peru"]"#)
            .unwrap_err();
        match err {
            PatchError::Parse { message, .. } => {
                assert_eq!(message, "element 1 is string, expected an object")
            }
            other => panic!("expected Parse, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = parse_collection(Path::new("c.json"), b"[{\"name\": ").unwrap_err();
        assert!(matches!(err, PatchError::Parse { .. }));
        let err = parse_collection(Path::new("c.json"), &[0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, PatchError::Parse { .. }));
    }

    #[test]
    fn test_render_uses_two_spaces_and_literal_unicode() {
        let input = records(json!([{"name": "Côte d'Ivoire", "subregion": "Western Africa"}]));
        let rendered = String::from_utf8(render_collection(&input).unwrap()).unwrap();
        assert_eq!(
            rendered,
            "[\n  {\n    \"name\": \"Côte d'Ivoire\",\n    \"subregion\": \"Western Africa\"\n  }\n]"
        );
        assert_eq!(render_collection(&[]).unwrap(), b"[]");
    }
}
