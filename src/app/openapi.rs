use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "DocJSON ToDo API",
        description = "Hypermedia ToDo list. Every response is a `vnd.document+json` document carrying the links and forms for the next request."
    ),
    paths(
        crate::core::http::handlers::health,
        crate::core::http::handlers::db_health,
        crate::notes::http::handlers::get_document,
        crate::notes::http::handlers::create_note,
        crate::notes::http::handlers::update_note,
        crate::notes::http::handlers::delete_note,
        crate::notes::http::handlers::list_fragment
    ),
    components(schemas(
        crate::docjson::Document,
        crate::docjson::ErrorDocument,
        crate::docjson::NoteList,
        crate::docjson::document::Kind,
        crate::docjson::document::Verb,
        crate::docjson::document::Field,
        crate::docjson::document::Link,
        crate::docjson::document::Meta,
        crate::docjson::document::Tabs,
        crate::docjson::document::NoteItem,
        crate::docjson::document::Notes,
        crate::docjson::document::ErrorMeta,
        crate::notes::http::NotePayload
    )),
    tags(
        (name = "Core", description = "Service endpoints"),
        (name = "Notes", description = "DocJSON ToDo documents")
    )
)]
pub struct ApiDoc;
