//! Response normalizer.
//!
//! Turns the dispatcher's raw text into a fully populated domain record or a
//! single [`NormalizeError`]. Untyped JSON never leaves this module.

pub mod birth_chart;
pub mod calendar;
pub mod catalogue;
pub mod horoscope;
pub mod matchmaking;
pub mod panchang;
pub mod tarot;

use serde_json::{Map, Value};

use crate::error::NormalizeError;

/// Removes an optional fenced-code wrapper (```json ... ```), including one
/// preceded by a line of prose. Only a fence opening a line counts.
pub fn strip_code_fences(raw: &str) -> &str {
    let t = raw.trim();
    let start = if t.starts_with("```") {
        0
    } else {
        match t.find("\n```") {
            Some(newline) => newline + 1,
            None => return t,
        }
    };
    let fenced = &t[start + 3..];
    // Language tag on the opening fence
    let body = fenced.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    let body = match body.rfind("```") {
        Some(end) => &body[..end],
        None => body,
    };
    body.trim()
}

/// Parses the reply as JSON, stripping fences only when the bare text does
/// not parse. Any parse error after that is final.
pub fn parse_payload(raw: &str) -> Result<Value, NormalizeError> {
    let trimmed = raw.trim();
    if let Ok(value) = serde_json::from_str(trimmed) {
        return Ok(value);
    }
    serde_json::from_str(strip_code_fences(trimmed))
        .map_err(|e| NormalizeError::InvalidJson(e.to_string()))
}

pub fn parse_object(raw: &str) -> Result<Map<String, Value>, NormalizeError> {
    match parse_payload(raw)? {
        Value::Object(obj) => Ok(obj),
        _ => Err(NormalizeError::UnexpectedShape("object")),
    }
}

/// A top-level array, or the array under one of `keys` in an object.
pub fn parse_list(raw: &str, keys: &[&str]) -> Result<Vec<Value>, NormalizeError> {
    match parse_payload(raw)? {
        Value::Array(items) => Ok(items),
        Value::Object(mut obj) => keys
            .iter()
            .find_map(|k| match obj.remove(*k) {
                Some(Value::Array(items)) => Some(items),
                _ => None,
            })
            .ok_or(NormalizeError::UnexpectedShape("array")),
        _ => Err(NormalizeError::UnexpectedShape("array")),
    }
}

/// Fails unless the payload carries at least one of `keys`.
pub fn require_any(
    obj: &Map<String, Value>,
    keys: &[&str],
    kind: &'static str,
) -> Result<(), NormalizeError> {
    if keys.iter().any(|k| obj.get(*k).is_some_and(|v| !v.is_null())) {
        Ok(())
    } else {
        Err(NormalizeError::NoContent(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_plain_json_untouched() {
        assert_eq!(strip_code_fences("  {\"a\": 1}  "), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_json_fence() {
        let raw = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_bare_fence_and_prose_prefix() {
        assert_eq!(strip_code_fences("```\n[1, 2]\n```"), "[1, 2]");
        let raw = "Here's the result:\n```json\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_unterminated_fence() {
        assert_eq!(strip_code_fences("```json\n{\"a\": 1}"), "{\"a\": 1}");
    }

    #[test]
    fn test_backticks_inside_strings_survive() {
        let raw = r#"{"prediction": "Use ``` sparingly", "luckyColor": "Red ```"}"#;
        assert_eq!(strip_code_fences(raw), raw);
        let value = parse_payload(raw).unwrap();
        assert_eq!(value["prediction"], "Use ``` sparingly");
        assert_eq!(value["luckyColor"], "Red ```");
    }

    #[test]
    fn test_fenced_reply_with_inner_backticks() {
        let raw = "```json\n{\"note\": \"a ``` b\"}\n```";
        assert_eq!(parse_payload(raw).unwrap()["note"], "a ``` b");
    }

    #[test]
    fn test_prose_is_invalid_json() {
        let err = parse_payload("The stars are bright today.").unwrap_err();
        assert!(matches!(err, NormalizeError::InvalidJson(_)));
    }

    #[test]
    fn test_parse_object_rejects_arrays() {
        assert_eq!(
            parse_object("[1]").unwrap_err(),
            NormalizeError::UnexpectedShape("object")
        );
    }

    #[test]
    fn test_parse_list_shapes() {
        assert_eq!(parse_list("[1, 2]", &["events"]).unwrap().len(), 2);
        assert_eq!(parse_list("{\"events\": [1]}", &["events"]).unwrap().len(), 1);
        assert!(parse_list("{\"other\": [1]}", &["events"]).is_err());
    }

    #[test]
    fn test_require_any() {
        let obj = parse_object("{\"x\": null, \"y\": 1}").unwrap();
        assert!(require_any(&obj, &["y"], "test").is_ok());
        assert_eq!(
            require_any(&obj, &["x"], "test"),
            Err(NormalizeError::NoContent("test"))
        );
    }
}
