//! Roster loader.
//!
//! Roster files are a flat list of records, one object per entity, keyed by
//! attribute name. JSON is the primary format; RON is accepted for
//! hand-written fixtures.

use std::path::Path;

use anyhow::{Context, bail};
use dle_core::{AttributeValue, Entity, ORDERED_DELIMITER, Record, Roster, RuleTable};
use serde_json::Value;

use crate::loaders::{LoadResult, read_file};

/// Loader for roster files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster from a `.json` or `.ron` file.
    ///
    /// Entity identifiers are read from the rule table's identifier key.
    pub fn load(path: &Path, rules: &RuleTable) -> LoadResult<Roster> {
        let content = read_file(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let roster = match extension.as_deref() {
            Some("json") => Self::from_json_str(&content, &rules.id_key),
            Some("ron") => Self::from_ron_str(&content, &rules.id_key),
            _ => bail!("Unsupported roster format: {}", path.display()),
        };

        roster.with_context(|| format!("Failed to load roster {}", path.display()))
    }

    /// Parse a JSON array of records.
    pub fn from_json_str(content: &str, id_key: &str) -> LoadResult<Roster> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster JSON: {}", e))?;

        let Value::Array(items) = value else {
            bail!("Roster JSON must be an array of objects");
        };

        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                json_record(item).with_context(|| format!("Invalid roster entry #{index}"))
            })
            .collect::<LoadResult<Vec<_>>>()?;

        build(records, id_key)
    }

    /// Parse a RON list of records.
    pub fn from_ron_str(content: &str, id_key: &str) -> LoadResult<Roster> {
        let records: Vec<Record> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        build(records, id_key)
    }
}

fn build(records: Vec<Record>, id_key: &str) -> LoadResult<Roster> {
    let entities = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Entity::from_record(record, id_key)
                .with_context(|| format!("Invalid roster entry #{index}"))
        })
        .collect::<LoadResult<Vec<_>>>()?;

    Ok(Roster::new(entities)?)
}

fn json_record(item: Value) -> LoadResult<Record> {
    let Value::Object(fields) = item else {
        bail!("expected an object, found {}", json_kind(&item));
    };

    let mut record = Record::new();
    for (key, value) in fields {
        if let Some(value) = json_value(&key, value)? {
            record.insert(key, value);
        }
    }
    Ok(record)
}

/// Converts one JSON field. `null` means the attribute is absent.
fn json_value(key: &str, value: Value) -> LoadResult<Option<AttributeValue>> {
    let converted = match value {
        Value::Null => None,
        Value::Number(number) => Some(match number.as_i64() {
            Some(integer) => AttributeValue::Integer(integer),
            None => AttributeValue::Text(number.to_string()),
        }),
        Value::String(text) => Some(AttributeValue::Text(text)),
        Value::Bool(flag) => Some(AttributeValue::Text(flag.to_string())),
        Value::Array(items) => {
            let parts = items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(text) => Some(Ok(text)),
                    Value::Number(number) => Some(Ok(number.to_string())),
                    Value::Null => None,
                    other => Some(Err(anyhow::anyhow!(
                        "attribute `{key}` has a nested {}",
                        json_kind(&other)
                    ))),
                })
                .collect::<LoadResult<Vec<_>>>()?;
            Some(AttributeValue::Text(parts.join(ORDERED_DELIMITER)))
        }
        Value::Object(_) => bail!("attribute `{key}` is an object"),
    };
    Ok(converted)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use dle_core::{RosterError, Variant};

    use super::*;

    #[test]
    fn json_numbers_become_integers_and_null_is_absent() {
        let roster = RosterLoader::from_json_str(
            r#"[{"card": "Knight", "cost": 3, "arena": null, "year": "2016 / 2023"}]"#,
            "card",
        )
        .unwrap();

        let knight = roster.get("Knight").unwrap();
        assert_eq!(knight.get("cost"), Some(&AttributeValue::Integer(3)));
        assert_eq!(knight.get("arena"), None);
        assert_eq!(
            knight.get("year"),
            Some(&AttributeValue::Text("2016 / 2023".into()))
        );
    }

    #[test]
    fn json_arrays_join_with_ordered_delimiter() {
        let roster =
            RosterLoader::from_json_str(r#"[{"name": "Nita", "class": ["Tank", "Support"]}]"#, "name")
                .unwrap();
        assert_eq!(
            roster.get("Nita").unwrap().get("class"),
            Some(&AttributeValue::Text("Tank / Support".into()))
        );
    }

    #[test]
    fn fractional_numbers_keep_their_text() {
        let roster =
            RosterLoader::from_json_str(r#"[{"name": "Colt", "reload": 1.5}]"#, "name").unwrap();
        assert_eq!(
            roster.get("Colt").unwrap().get("reload"),
            Some(&AttributeValue::Text("1.5".into()))
        );
    }

    #[test]
    fn rejects_non_array_and_nested_objects() {
        assert!(RosterLoader::from_json_str(r#"{"card": "Knight"}"#, "card").is_err());
        assert!(RosterLoader::from_json_str(r#"[{"card": "Knight", "x": {}}]"#, "card").is_err());
        assert!(RosterLoader::from_json_str(r#"[3]"#, "card").is_err());
    }

    #[test]
    fn empty_roster_is_rejected() {
        let err = RosterLoader::from_json_str("[]", "card").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RosterError>(),
            Some(RosterError::Empty)
        ));
    }

    #[test]
    fn missing_identifier_names_the_entry() {
        let err =
            RosterLoader::from_json_str(r#"[{"card": "Knight"}, {"cost": 3}]"#, "card").unwrap_err();
        assert!(format!("{err:#}").contains("#1"));
    }

    #[test]
    fn loads_ron_files_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".ron").tempfile().unwrap();
        write!(
            file,
            r#"[{{"name": "Shelly", "releaseYear": 2017}}, {{"name": "Colt", "releaseYear": 2017}}]"#
        )
        .unwrap();

        let roster = RosterLoader::load(file.path(), &Variant::BrawlStars.rules()).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(
            roster.get("Colt").unwrap().get("releaseYear"),
            Some(&AttributeValue::Integer(2017))
        );
    }

    #[test]
    fn unknown_extension_is_an_error() {
        let file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        assert!(RosterLoader::load(file.path(), &Variant::ClashRoyale.rules()).is_err());
    }
}
