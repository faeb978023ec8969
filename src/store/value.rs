//! Conversion between JSON and Firestore's typed value representation

use crate::error::{PipelineError, Result};
use serde_json::{json, Map, Number, Value};

/// Encode a JSON object as a Firestore `fields` map
pub(crate) fn encode_fields(fields: &Map<String, Value>) -> Value {
    Value::Object(
        fields
            .iter()
            .map(|(k, v)| (k.clone(), encode_value(v)))
            .collect(),
    )
}

pub(crate) fn encode_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        // Firestore sends and expects 64-bit integers as strings
        Value::Number(n) => match n.as_i64() {
            Some(i) => json!({ "integerValue": i.to_string() }),
            None => json!({ "doubleValue": n.as_f64().unwrap_or_default() }),
        },
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => json!({
            "arrayValue": { "values": items.iter().map(encode_value).collect::<Vec<_>>() }
        }),
        Value::Object(map) => json!({ "mapValue": { "fields": encode_fields(map) } }),
    }
}

/// Decode a Firestore `fields` map into a JSON object
pub(crate) fn decode_fields(fields: &Value) -> Result<Map<String, Value>> {
    match fields {
        Value::Null => Ok(Map::new()),
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| decode_value(v).map(|decoded| (k.clone(), decoded)))
            .collect(),
        other => Err(PipelineError::StoreError(format!(
            "expected a fields object, got {}",
            other
        ))),
    }
}

pub(crate) fn decode_value(value: &Value) -> Result<Value> {
    let Some((kind, inner)) = value.as_object().and_then(|m| m.iter().next()) else {
        return Err(PipelineError::StoreError(format!("malformed value: {}", value)));
    };

    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" => Ok(Value::Bool(inner.as_bool().unwrap_or_default())),
        "integerValue" => {
            let parsed = match inner {
                Value::String(s) => s.parse::<i64>().ok(),
                other => other.as_i64(),
            };
            parsed.map(Value::from).ok_or_else(|| {
                PipelineError::StoreError(format!("invalid integerValue: {}", inner))
            })
        }
        "doubleValue" => Ok(inner
            .as_f64()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null)),
        "stringValue" | "timestampValue" | "referenceValue" | "bytesValue" => {
            Ok(Value::String(inner.as_str().unwrap_or_default().to_string()))
        }
        "geoPointValue" => Ok(inner.clone()),
        "arrayValue" => {
            let values = match inner.get("values") {
                Some(Value::Array(items)) => items
                    .iter()
                    .map(decode_value)
                    .collect::<Result<Vec<_>>>()?,
                _ => Vec::new(),
            };
            Ok(Value::Array(values))
        }
        "mapValue" => Ok(Value::Object(decode_fields(
            inner.get("fields").unwrap_or(&Value::Null),
        )?)),
        other => Err(PipelineError::StoreError(format!(
            "unsupported value type '{}'",
            other
        ))),
    }
}
