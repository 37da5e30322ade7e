//! Explicit schema checks for note payloads.
//!
//! Payloads arrive as a loose JSON object (JSON bodies are used as-is, form
//! bodies are lifted into string values). Unknown keys are ignored.

use serde_json::{Map, Value};

use crate::docjson::FieldErrors;

use super::repo::{NewNote, NoteChanges};

pub const TEXT_MAX_CHARS: usize = 100;

const REQUIRED: &str = "This field is required.";
const NOT_NULL: &str = "This field may not be null.";
const NOT_BLANK: &str = "This field may not be blank.";
const NOT_A_STRING: &str = "Not a valid string.";
const NOT_A_BOOLEAN: &str = "Must be a valid boolean.";

const TRUE_VALUES: [&str; 6] = ["true", "t", "yes", "y", "on", "1"];
const FALSE_VALUES: [&str; 6] = ["false", "f", "no", "n", "off", "0"];

pub fn validate_new_note(payload: &Map<String, Value>) -> Result<NewNote, FieldErrors> {
    let mut errors = FieldErrors::new();

    let text = match payload.get("text") {
        None => {
            push(&mut errors, "text", REQUIRED.to_string());
            None
        }
        Some(value) => check_text(value, &mut errors),
    };
    let completed = match payload.get("completed") {
        None => Some(false),
        Some(value) => check_completed(value, &mut errors),
    };

    match (text, completed) {
        (Some(text), Some(completed)) if errors.is_empty() => Ok(NewNote { text, completed }),
        _ => Err(errors),
    }
}

/// Both fields are optional; an empty payload is a valid no-op.
pub fn validate_note_changes(payload: &Map<String, Value>) -> Result<NoteChanges, FieldErrors> {
    let mut errors = FieldErrors::new();

    let text = payload
        .get("text")
        .and_then(|value| check_text(value, &mut errors));
    let completed = payload
        .get("completed")
        .and_then(|value| check_completed(value, &mut errors));

    if errors.is_empty() {
        Ok(NoteChanges { text, completed })
    } else {
        Err(errors)
    }
}

fn check_text(value: &Value, errors: &mut FieldErrors) -> Option<String> {
    let raw = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Null => {
            push(errors, "text", NOT_NULL.to_string());
            return None;
        }
        Value::Bool(_) | Value::Array(_) | Value::Object(_) => {
            push(errors, "text", NOT_A_STRING.to_string());
            return None;
        }
    };

    let text = raw.trim();
    if text.is_empty() {
        push(errors, "text", NOT_BLANK.to_string());
        return None;
    }
    if text.chars().count() > TEXT_MAX_CHARS {
        push(
            errors,
            "text",
            format!("Ensure this field has no more than {TEXT_MAX_CHARS} characters."),
        );
        return None;
    }

    Some(text.to_string())
}

fn check_completed(value: &Value, errors: &mut FieldErrors) -> Option<bool> {
    let parsed = match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        Value::String(s) => {
            let s = s.trim().to_ascii_lowercase();
            if TRUE_VALUES.contains(&s.as_str()) {
                Some(true)
            } else if FALSE_VALUES.contains(&s.as_str()) {
                Some(false)
            } else {
                None
            }
        }
        Value::Null => {
            push(errors, "completed", NOT_NULL.to_string());
            return None;
        }
        Value::Array(_) | Value::Object(_) => None,
    };

    if parsed.is_none() {
        push(errors, "completed", NOT_A_BOOLEAN.to_string());
    }
    parsed
}

fn push(errors: &mut FieldErrors, field: &str, message: String) {
    errors.entry(field.to_string()).or_default().push(message);
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn payload(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn new_note_defaults_to_incomplete_and_trims_text() {
        let note = validate_new_note(&payload(json!({ "text": "  buy milk  " })))
            .expect("payload is valid");
        assert_eq!(note.text, "buy milk");
        assert!(!note.completed);
    }

    #[test]
    fn new_note_requires_text() {
        let errors = validate_new_note(&payload(json!({ "completed": true })))
            .expect_err("text is missing");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["text"], vec![REQUIRED.to_string()]);
    }

    #[test]
    fn errors_are_reported_in_field_order() {
        let errors = validate_new_note(&payload(json!({
            "completed": "maybe",
            "text": "",
        })))
        .expect_err("both fields are invalid");
        let fields: Vec<&str> = errors.keys().map(String::as_str).collect();
        assert_eq!(fields, vec!["text", "completed"]);
        assert_eq!(errors["text"], vec![NOT_BLANK.to_string()]);
        assert_eq!(errors["completed"], vec![NOT_A_BOOLEAN.to_string()]);
    }

    #[test]
    fn text_length_is_counted_in_characters() {
        let exactly_max = "é".repeat(TEXT_MAX_CHARS);
        assert!(validate_new_note(&payload(json!({ "text": exactly_max }))).is_ok());

        let too_long = "a".repeat(TEXT_MAX_CHARS + 1);
        let errors = validate_new_note(&payload(json!({ "text": too_long })))
            .expect_err("text is too long");
        assert_eq!(
            errors["text"],
            vec!["Ensure this field has no more than 100 characters.".to_string()]
        );
    }

    #[test]
    fn completed_accepts_form_style_booleans() {
        for (raw, expected) in [
            (json!("true"), true),
            (json!("On"), true),
            (json!(1), true),
            (json!("FALSE"), false),
            (json!("0"), false),
            (json!(false), false),
        ] {
            let changes = validate_note_changes(&payload(json!({ "completed": raw })))
                .expect("boolean-like value is accepted");
            assert_eq!(changes.completed, Some(expected));
        }
    }

    #[test]
    fn nulls_and_wrong_types_are_rejected() {
        let errors = validate_note_changes(&payload(json!({
            "text": null,
            "completed": [true],
        })))
        .expect_err("payload is invalid");
        assert_eq!(errors["text"], vec![NOT_NULL.to_string()]);
        assert_eq!(errors["completed"], vec![NOT_A_BOOLEAN.to_string()]);

        let errors = validate_note_changes(&payload(json!({ "text": true })))
            .expect_err("bool is not a string");
        assert_eq!(errors["text"], vec![NOT_A_STRING.to_string()]);
    }

    #[test]
    fn empty_changes_are_a_no_op() {
        let changes = validate_note_changes(&payload(json!({ "unknown": 1 })))
            .expect("unknown keys are ignored");
        assert_eq!(changes, NoteChanges::default());
    }
}
