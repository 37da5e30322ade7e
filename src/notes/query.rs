use url::form_urlencoded;

use super::repo::NoteFilter;

/// Filter and page state for one request, parsed from its query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub completed: Option<bool>,
    pub term: Option<String>,
    pub page: usize,
    /// Every decoded pair, in request order, for the preserved suffix.
    pairs: Vec<(String, String)>,
}

impl QueryState {
    pub fn parse(raw: Option<&str>) -> Self {
        let pairs: Vec<(String, String)> =
            form_urlencoded::parse(raw.unwrap_or_default().as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect();

        let mut completed_param = None;
        let mut complete_param = None;
        let mut term = None;
        let mut page = None;

        for (key, value) in &pairs {
            let slot = match key.as_str() {
                "completed" => &mut completed_param,
                "complete" => &mut complete_param,
                "term" => &mut term,
                "page" => &mut page,
                _ => continue,
            };
            // last occurrence wins, like a plain dict lookup
            *slot = Some(value.clone());
        }

        let completed = completed_param
            .or(complete_param)
            .map(|v| v.eq_ignore_ascii_case("true"));
        let term = term
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        let page = page
            .and_then(|p| p.trim().parse::<usize>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1);

        Self {
            completed,
            term,
            page,
            pairs,
        }
    }

    pub fn filter(&self) -> NoteFilter {
        NoteFilter {
            completed: self.completed,
            term: self.term.clone(),
        }
    }

    /// `?<query>` re-encoded from the request's parameters, or an empty
    /// string when it had none.
    pub fn suffix(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }

        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.pairs)
            .finish();
        format!("?{query}")
    }

    /// Canonical query string for `page`, carrying the active filters.
    pub fn page_query(&self, page: usize) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(completed) = self.completed {
            serializer.append_pair("completed", if completed { "true" } else { "false" });
        }
        if let Some(term) = &self.term {
            serializer.append_pair("term", term);
        }
        serializer.append_pair("page", &page.to_string());
        serializer.finish()
    }
}
