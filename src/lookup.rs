//! Field lookups over JSON records.
//!
//! Records are either an object keyed by id, or an array of objects that
//! carry an `"id"` field. A missing key and an explicit `null` both count as
//! nothing.

use serde_json::Value;

use crate::optional::Optional;

/// Finds the record stored under `key`, returning `None` when there is none.
pub fn find_record<'a>(records: &'a Value, key: &str) -> Option<&'a Value> {
    let record = match records {
        Value::Object(map) => map.get(key),
        Value::Array(items) => items
            .iter()
            .find(|item| item.get("id").is_some_and(|id| id_matches(id, key))),
        _ => None,
    };
    record.filter(|record| !record.is_null())
}

fn id_matches(id: &Value, key: &str) -> bool {
    match id {
        Value::String(id) => id == key,
        Value::Number(id) => id.to_string() == key,
        _ => false,
    }
}

/// Renders a JSON value as plain text. Strings lose their quotes.
pub fn render(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Extracts `field` from a single record, treating `null` as missing.
pub fn field_of(record: &Value, field: &str) -> Optional<String> {
    Optional::from_nullable(record.get(field))
        .filter(|value| !value.is_null())
        .map(render)
}

pub fn lookup_field(records: &Value, key: &str, field: &str) -> Optional<String> {
    Optional::from_nullable(find_record(records, key)).flat_map(|record| field_of(record, field))
}

/// Resolves `field` of the record under `key`, or `default` when either the
/// record or the field is missing.
pub fn resolve_field(records: &Value, key: &str, field: &str, default: &str) -> String {
    lookup_field(records, key, field).get_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_find_record_in_object() {
        let records = json!({ "a": { "name": "Ada" }, "b": null });
        assert_eq!(find_record(&records, "a"), Some(&json!({ "name": "Ada" })));
        assert_eq!(find_record(&records, "b"), None);
        assert_eq!(find_record(&records, "c"), None);
    }

    #[test]
    fn test_find_record_in_array() {
        let records = json!([{ "id": 7, "name": "Grace" }, { "id": "x", "name": "Alan" }]);
        assert_eq!(
            find_record(&records, "7").and_then(|r| r.get("name")),
            Some(&json!("Grace"))
        );
        assert_eq!(
            find_record(&records, "x").and_then(|r| r.get("name")),
            Some(&json!("Alan"))
        );
        assert_eq!(find_record(&records, "8"), None);
    }

    #[test]
    fn test_find_record_in_scalar() {
        assert_eq!(find_record(&json!(3), "3"), None);
    }

    #[test]
    fn test_render() {
        assert_eq!(render(&json!("plain")), "plain");
        assert_eq!(render(&json!(12)), "12");
        assert_eq!(render(&json!([1, 2])), "[1,2]");
        assert_eq!(render(&json!(false)), "false");
    }

    #[test]
    fn test_field_of() {
        let record = json!({ "name": "Ada", "age": 36, "email": null });
        assert_eq!(field_of(&record, "name"), Optional::present("Ada".to_string()));
        assert_eq!(field_of(&record, "age"), Optional::present("36".to_string()));
        assert_eq!(field_of(&record, "email"), Optional::absent());
        assert_eq!(field_of(&record, "phone"), Optional::absent());
        assert_eq!(field_of(&json!("scalar"), "name"), Optional::absent());
    }

    #[test]
    fn test_lookup_field() {
        let records = json!({ "a": { "name": "Ada", "age": null } });
        assert_eq!(lookup_field(&records, "a", "name"), Optional::present("Ada".to_string()));
        assert_eq!(lookup_field(&records, "a", "age"), Optional::absent());
        assert_eq!(lookup_field(&records, "a", "email"), Optional::absent());
        assert_eq!(lookup_field(&records, "z", "name"), Optional::absent());
    }
}
