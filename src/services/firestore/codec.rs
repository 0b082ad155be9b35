//! Conversion between [`Value`] and the Firestore REST value encoding.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Map, Value as Json};
use std::collections::BTreeMap;

use crate::store::{StoreError, Value};

pub fn encode_value(value: &Value) -> Json {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Integer(n) => json!({ "integerValue": n.to_string() }),
        Value::Double(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s }),
        Value::Timestamp(ts) => {
            json!({ "timestampValue": ts.to_rfc3339_opts(SecondsFormat::Micros, true) })
        }
        Value::Array(values) => {
            let values: Vec<Json> = values.iter().map(encode_value).collect();
            json!({ "arrayValue": { "values": values } })
        }
        Value::Map(fields) => json!({ "mapValue": { "fields": encode_fields(fields) } }),
    }
}

pub fn encode_fields(fields: &BTreeMap<String, Value>) -> Map<String, Json> {
    fields
        .iter()
        .map(|(k, v)| (k.clone(), encode_value(v)))
        .collect()
}

pub fn decode_value(json: &Json) -> Result<Value, StoreError> {
    let obj = json
        .as_object()
        .ok_or_else(|| invalid(format!("expected a value object, got {}", json)))?;
    let (kind, inner) = obj
        .iter()
        .next()
        .ok_or_else(|| invalid("empty value object".to_string()))?;

    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" => inner
            .as_bool()
            .map(Value::Bool)
            .ok_or_else(|| invalid(format!("bad booleanValue {}", inner))),
        "integerValue" => {
            // Encoded as a decimal string, but accept a bare number too.
            let parsed = match inner {
                Json::String(s) => s.parse::<i64>().ok(),
                other => other.as_i64(),
            };
            parsed
                .map(Value::Integer)
                .ok_or_else(|| invalid(format!("bad integerValue {}", inner)))
        }
        "doubleValue" => inner
            .as_f64()
            .map(Value::Double)
            .ok_or_else(|| invalid(format!("bad doubleValue {}", inner))),
        "stringValue" | "referenceValue" | "bytesValue" => inner
            .as_str()
            .map(|s| Value::String(s.to_string()))
            .ok_or_else(|| invalid(format!("bad {} {}", kind, inner))),
        "timestampValue" => {
            let raw = inner
                .as_str()
                .ok_or_else(|| invalid(format!("bad timestampValue {}", inner)))?;
            DateTime::parse_from_rfc3339(raw)
                .map(|ts| Value::Timestamp(ts.with_timezone(&Utc)))
                .map_err(|e| invalid(format!("bad timestampValue {}: {}", raw, e)))
        }
        "arrayValue" => {
            let values = match inner.get("values").and_then(Json::as_array) {
                Some(values) => values.iter().map(decode_value).collect::<Result<_, _>>()?,
                None => Vec::new(),
            };
            Ok(Value::Array(values))
        }
        "mapValue" => {
            let fields = match inner.get("fields").and_then(Json::as_object) {
                Some(fields) => decode_fields(fields)?,
                None => BTreeMap::new(),
            };
            Ok(Value::Map(fields))
        }
        "geoPointValue" => {
            let mut point = BTreeMap::new();
            for axis in ["latitude", "longitude"] {
                let coord = inner.get(axis).and_then(Json::as_f64).unwrap_or(0.0);
                point.insert(axis.to_string(), Value::Double(coord));
            }
            Ok(Value::Map(point))
        }
        other => Err(invalid(format!("unknown value kind '{}'", other))),
    }
}

pub fn decode_fields(fields: &Map<String, Json>) -> Result<BTreeMap<String, Value>, StoreError> {
    fields
        .iter()
        .map(|(k, v)| Ok((k.clone(), decode_value(v)?)))
        .collect()
}

/// Quotes a field name for use in field paths (update masks, filters).
pub fn field_path(name: &str) -> String {
    let mut chars = name.chars();
    let simple = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if simple {
        name.to_string()
    } else {
        format!("`{}`", name.replace('\\', "\\\\").replace('`', "\\`"))
    }
}

/// The trailing segment of a full document resource name.
pub fn document_id(name: &str) -> Result<String, StoreError> {
    name.rsplit('/')
        .next()
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .ok_or_else(|| invalid(format!("bad document name '{}'", name)))
}

fn invalid(message: String) -> StoreError {
    StoreError::InvalidResponse(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_travel_as_strings() {
        assert_eq!(encode_value(&Value::Integer(12)), json!({ "integerValue": "12" }));
        assert_eq!(
            decode_value(&json!({ "integerValue": "12" })).unwrap(),
            Value::Integer(12)
        );
    }

    #[test]
    fn nested_map_and_array_decode() {
        let raw = json!({
            "mapValue": { "fields": {
                "days": { "arrayValue": { "values": [
                    { "integerValue": "1" }, { "integerValue": "3" }
                ] } },
                "empty": { "arrayValue": {} }
            } }
        });

        let Value::Map(fields) = decode_value(&raw).unwrap() else {
            panic!("expected a map");
        };
        assert_eq!(fields["days"], Value::from(vec![1i64, 3]));
        assert_eq!(fields["empty"], Value::Array(Vec::new()));
    }

    #[test]
    fn timestamp_decodes_to_utc() {
        let value = decode_value(&json!({ "timestampValue": "2024-03-01T12:00:00.123456Z" })).unwrap();
        let Value::Timestamp(ts) = value else {
            panic!("expected a timestamp");
        };
        assert_eq!(ts.to_rfc3339_opts(SecondsFormat::Secs, true), "2024-03-01T12:00:00Z");
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(decode_value(&json!({ "weirdValue": 1 })).is_err());
    }

    #[test]
    fn field_paths_quote_unusual_names() {
        assert_eq!(field_path("classesPerMonth"), "classesPerMonth");
        assert_eq!(field_path("social-media"), "`social-media`");
        assert_eq!(field_path("9lives"), "`9lives`");
    }

    #[test]
    fn document_id_is_last_segment() {
        let name = "projects/p/databases/(default)/documents/users/abc123";
        assert_eq!(document_id(name).unwrap(), "abc123");
    }
}
