use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Media type of every DocJSON body, sent without a charset parameter.
pub const DOCJSON_MEDIA_TYPE: &str = "vnd.document+json";

/// Like `axum::Json`, but tagged with the DocJSON media type.
#[derive(Debug, Clone)]
pub struct DocJson<T>(pub T);

impl<T> IntoResponse for DocJson<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(bytes) => (
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static(DOCJSON_MEDIA_TYPE),
                )],
                bytes,
            )
                .into_response(),
            Err(e) => {
                tracing::error!("failed to serialize document: {e}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
