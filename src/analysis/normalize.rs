use super::schema::Validate;
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

const FENCE: &str = "```";

/// Removes a leading ```` ```lang ```` line and a trailing ```` ``` ```` from a model reply.
///
/// Only fences at the edges are stripped; backticks inside the payload are left alone.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix(FENCE) {
        // The language tag runs to the end of the opening line
        text = match rest.find('\n') {
            Some(newline) if is_language_tag(&rest[..newline]) => &rest[newline + 1..],
            None if is_language_tag(rest) => "",
            _ => strip_inline_tag(rest),
        };
    }

    if let Some(rest) = text.trim_end().strip_suffix(FENCE) {
        text = rest;
    }

    text.trim()
}

/// Handles ```` ```json{...} ```` where the tag shares a line with the payload.
fn strip_inline_tag(rest: &str) -> &str {
    let body = rest
        .trim_start_matches(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        .trim_start();

    match body.chars().next() {
        Some('{') | Some('[') => body,
        _ => rest,
    }
}

fn is_language_tag(candidate: &str) -> bool {
    candidate
        .trim()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Unwraps and parses the reply as a JSON object, without any schema checks.
pub fn parse_reply(raw: &str) -> Result<Value> {
    let cleaned = strip_code_fences(raw);

    let value: Value =
        serde_json::from_str(cleaned).map_err(|e| Error::malformed_output(e.to_string()))?;

    if !value.is_object() {
        return Err(Error::malformed_output(format!(
            "expected a JSON object, got {}",
            json_kind(&value)
        )));
    }

    Ok(value)
}

/// Parses the reply into `T` and enforces its schema.
pub fn normalize<T>(raw: &str) -> Result<T>
where
    T: DeserializeOwned + Validate,
{
    let value = parse_reply(raw)?;
    let record: T = serde_json::from_value(value).map_err(|e| Error::schema(e.to_string()))?;
    record.validate()?;

    debug!("Model reply normalized into {}", std::any::type_name::<T>());

    Ok(record)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
