use axum::{
    body::Bytes,
    http::{header, HeaderMap},
};
use serde_json::Value;

use crate::storage::RepositoryInput;

use super::error::ApiError;

/// Reads a create/update body the lenient way.
///
/// Without a JSON content type, or with an empty body, every field is absent. A JSON array
/// carries no fields either. Only unparsable JSON and bare scalars are rejected.
pub fn repository_input(
    headers: &HeaderMap,
    body: &Bytes,
) -> Result<RepositoryInput, ApiError> {
    if !is_json(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(RepositoryInput::default());
    }

    match serde_json::from_slice::<Value>(body)? {
        object @ Value::Object(_) => Ok(serde_json::from_value(object)?),
        Value::Array(_) => Ok(RepositoryInput::default()),
        _ => Err(ApiError::UnsupportedBody),
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || mime.ends_with("+json")
}
