pub const ROOT_PATH: &str = "/";
pub const LIST_PATH: &str = "/list/";

/// URL building for document affordances.
///
/// Affordance URLs are root-relative; only `meta.url` is made absolute,
/// against `origin` (`scheme://host`, possibly empty).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links {
    origin: String,
}

impl Links {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
        }
    }

    pub fn absolute(&self, path: &str) -> String {
        format!("{}{path}", self.origin)
    }

    pub fn root(&self) -> String {
        ROOT_PATH.to_string()
    }

    pub fn filtered_root(&self, completed: bool) -> String {
        format!("{ROOT_PATH}?completed={completed}")
    }

    pub fn item(&self, note_id: i64) -> String {
        format!("/{note_id}/")
    }

    pub fn list_page(&self, query: &str) -> String {
        format!("{LIST_PATH}?{query}")
    }
}
