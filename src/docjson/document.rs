use serde::Serialize;
use utoipa::ToSchema;

/// Value of the `_type` key every DocJSON object starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Document,
    Link,
    Form,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// An input field advertised by a link or form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Field {
    pub name: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
}

impl Field {
    pub fn required(name: &str) -> Self {
        Self {
            name: name.to_string(),
            required: true,
        }
    }

    pub fn optional(name: &str) -> Self {
        Self {
            name: name.to_string(),
            required: false,
        }
    }
}

/// A link or form descriptor: one state transition the client may take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Link {
    #[serde(rename = "_type")]
    pub kind: Kind,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<Verb>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
}

impl Link {
    pub fn to(url: impl Into<String>) -> Self {
        Self {
            kind: Kind::Link,
            url: url.into(),
            method: None,
            fields: Vec::new(),
        }
    }

    pub fn action(url: impl Into<String>, method: Verb, fields: Vec<Field>) -> Self {
        Self {
            kind: Kind::Link,
            url: url.into(),
            method: Some(method),
            fields,
        }
    }

    pub fn form(url: impl Into<String>, method: Verb, fields: Vec<Field>) -> Self {
        Self {
            kind: Kind::Form,
            url: url.into(),
            method: Some(method),
            fields,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Meta {
    pub url: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Tabs {
    pub all: Link,
    pub complete: Link,
    pub incomplete: Link,
}

/// Projection of a note as clients see it. The id only appears inside the
/// edit and delete URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct NoteItem {
    pub text: String,
    pub completed: bool,
    pub edit: Link,
    pub delete: Link,
}

/// One page of notes, served inline by the paginated document and on its own
/// by `/list/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct NoteList {
    #[serde(rename = "_type")]
    pub kind: Kind,
    pub items: Vec<NoteItem>,
    pub page: usize,
    pub num_pages: usize,
    pub count: usize,
    pub next: Option<Link>,
    pub previous: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum Notes {
    All(Vec<NoteItem>),
    Page(NoteList),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Document {
    #[serde(rename = "_type")]
    pub kind: Kind,
    pub meta: Meta,
    pub tabs: Tabs,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<Link>,
    pub create_note: Link,
    pub notes: Notes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ErrorMeta {
    pub error: String,
}

/// Document variant carrying only a human-readable error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ErrorDocument {
    #[serde(rename = "_type")]
    pub kind: Kind,
    pub meta: ErrorMeta,
}
