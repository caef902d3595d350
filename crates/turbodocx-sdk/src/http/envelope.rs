/*
[INPUT]:  Raw response bodies from the TurboDocx backend
[OUTPUT]: Decoded JSON values with the optional `data` wrapper removed
[POS]:    HTTP layer - response normalization shared by every verb
[UPDATE]: When the backend settles on a declared envelope schema
*/

use serde_json::{Map, Value};

use crate::http::{Result, TurboDocxError};

/// Remove one `data` level when it is the only key of the object.
///
/// This is a heuristic, not a schema: a genuine single-key payload whose key
/// happens to be `data` is unwrapped as well. A `null` data value is kept.
pub fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.len() == 1 && is_present(map.get("data")) => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Decode a success body. Empty bodies decode to an empty object.
pub fn decode_body(body: &[u8]) -> Result<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(body).map_err(TurboDocxError::network)
}

/// Pull a human-readable message out of an error body: `message`, then `error`.
pub fn error_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    ["message", "error"]
        .iter()
        .filter_map(|key| value.get(*key))
        .find(|v| !v.is_null())
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
}

fn is_present(value: Option<&Value>) -> bool {
    matches!(value, Some(v) if !v.is_null())
}
