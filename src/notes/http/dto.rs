use axum::http::{HeaderMap, header};
use serde_json::{Map, Value};
use url::form_urlencoded;
use utoipa::{IntoParams, ToSchema};

use crate::error::{ApiError, ApiResult};

/// Query parameters understood by the document endpoints. Parsing happens in
/// `QueryState`; this type only describes them.
#[derive(IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DocumentQuery {
    /// `true` for completed notes only, any other value for incomplete ones.
    pub completed: Option<String>,
    /// Alias of `completed`, consulted when `completed` is absent.
    pub complete: Option<String>,
    /// Case-insensitive substring filter on the note text.
    pub term: Option<String>,
    /// 1-based page index; malformed or out-of-range values mean page 1.
    pub page: Option<String>,
}

/// Fields accepted when creating or updating a note, as JSON or as a
/// url-encoded form.
#[derive(ToSchema)]
pub struct NotePayload {
    /// Required on create, at most 100 characters.
    pub text: Option<String>,
    pub completed: Option<bool>,
}

pub(crate) fn parse_payload(headers: &HeaderMap, body: &[u8]) -> ApiResult<Map<String, Value>> {
    let is_form = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

    if is_form {
        return Ok(form_urlencoded::parse(body)
            .map(|(k, v)| (k.into_owned(), Value::String(v.into_owned())))
            .collect());
    }

    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ApiError::BadRequest(format!(
            "non_field_errors - Invalid data. Expected a dictionary, but got {}.",
            json_kind(&other)
        ))),
        Err(e) => Err(ApiError::BadRequest(format!("JSON parse error - {e}"))),
    }
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
