use indexmap::IndexMap;

use super::document::{ErrorDocument, ErrorMeta, Kind};

/// Field name to validation messages, in the order the fields were checked.
pub type FieldErrors = IndexMap<String, Vec<String>>;

impl ErrorDocument {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            kind: Kind::Document,
            meta: ErrorMeta {
                error: message.into(),
            },
        }
    }

    /// One line per field: `<field> - <message>, <message>`.
    pub fn from_field_errors(errors: &FieldErrors) -> Self {
        let message = errors
            .iter()
            .map(|(field, messages)| format!("{field} - {}", messages.join(", ")))
            .collect::<Vec<_>>()
            .join("\n");

        Self::new(message)
    }
}
