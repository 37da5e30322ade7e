use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::header};

use crate::{AppState, docjson::Links, notes::query::QueryState};

/// Per-request inputs of document assembly: the parsed query string and the
/// origin `meta.url` is built against.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub query: QueryState,
    pub links: Links,
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let query = QueryState::parse(parts.uri.query());

        let origin = match &state.docs.public_base_url {
            Some(base) => base.clone(),
            None => parts
                .headers
                .get(header::HOST)
                .and_then(|v| v.to_str().ok())
                .or_else(|| parts.uri.authority().map(|a| a.as_str()))
                .map(|host| format!("http://{host}"))
                .unwrap_or_default(),
        };

        Ok(RequestContext {
            query,
            links: Links::new(origin),
        })
    }
}
