//! Message `content` may be a string or a list of parts, where a part is a
//! string or an object with a `text` field.

use serde_json::Value;

use veil_core::json;

/// Flatten content to a single string; list parts are joined with a space.
pub fn content_text(content: &Value) -> String {
    match content {
        Value::Array(parts) => parts
            .iter()
            .filter_map(|part| match part {
                Value::String(s) => Some(s.clone()),
                Value::Object(map) => map.get("text").map(json::value_text),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(" "),
        other => json::value_text(other),
    }
}

/// Length of content in characters, or `None` for content that is neither
/// a string nor a list.
pub fn content_len(content: &Value) -> Option<usize> {
    match content {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(parts) => Some(
            parts
                .iter()
                .map(|part| match part {
                    Value::String(s) => s.chars().count(),
                    Value::Object(map) => map
                        .get("text")
                        .and_then(Value::as_str)
                        .map_or(0, |s| s.chars().count()),
                    _ => 0,
                })
                .sum(),
        ),
        _ => None,
    }
}

/// Apply `f` to every piece of text in `content`, in place.
pub fn rewrite_text(content: &mut Value, f: &mut dyn FnMut(&str) -> String) {
    match content {
        Value::String(s) => *s = f(s),
        Value::Array(parts) => {
            for part in parts {
                match part {
                    Value::String(s) => *s = f(s),
                    Value::Object(map) => {
                        if let Some(Value::String(s)) = map.get_mut("text") {
                            *s = f(s);
                        }
                    }
                    _ => {}
                }
            }
        }
        _ => {}
    }
}
