use serde_json::{json, Map, Value};

use veil_core::{VeilError, VeilErrorCode};

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

/// Wrap a payload object as `{"status": "success", ...payload}`.
///
/// A non-object payload lands under `result`.
pub fn success(payload: Value) -> Value {
    let mut map = match payload {
        Value::Object(map) => map,
        other => {
            let mut map = Map::new();
            map.insert("result".to_string(), other);
            map
        }
    };
    map.insert("status".to_string(), Value::from(STATUS_SUCCESS));
    Value::Object(map)
}

/// `{"status": "error", "error_message": ..., "error_code": ...}`.
pub fn error(err: &VeilError) -> Value {
    json!({
        "status": STATUS_ERROR,
        "error_message": err.message(),
        "error_code": err.error_code(),
    })
}
