#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use docjson_todo::{
    AppState,
    app::router::build_router,
    config::{DocSettings, DocumentProfile},
    db,
    notes::repo::{self, NewNote, Note},
};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const TEST_HOST: &str = "testserver";

pub struct TestApp {
    app: Router,
    pub db: SqlitePool,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Value,
}

pub async fn memory_pool() -> SqlitePool {
    let pool = db::connect_in_memory()
        .await
        .expect("failed to open in-memory sqlite");
    db::migrate(&pool).await.expect("failed to run migrations");
    pool
}

pub async fn seed_note(db: &SqlitePool, text: &str, completed: bool) -> Note {
    repo::create_note(
        db,
        NewNote {
            text: text.to_string(),
            completed,
        },
    )
    .await
    .expect("failed to seed note")
}

/// Texts of the notes in a document or list fragment, in response order.
pub fn note_texts(notes: &Value) -> Vec<String> {
    let items = notes
        .get("items")
        .unwrap_or(notes)
        .as_array()
        .expect("notes are not an array");
    items
        .iter()
        .map(|item| {
            item.get("text")
                .and_then(Value::as_str)
                .expect("note misses text")
                .to_string()
        })
        .collect()
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_profile(DocumentProfile::Flat).await
    }

    pub async fn paginated() -> Self {
        Self::with_profile(DocumentProfile::Paginated).await
    }

    pub async fn with_profile(profile: DocumentProfile) -> Self {
        Self::with_settings(DocSettings {
            profile,
            ..DocSettings::default()
        })
        .await
    }

    pub async fn with_settings(docs: DocSettings) -> Self {
        let db = memory_pool().await;
        let state = AppState {
            db: db.clone(),
            docs,
        };

        Self {
            app: build_router(state),
            db,
        }
    }

    pub async fn get_json(&self, path: &str) -> (StatusCode, Value) {
        let res = self.request(Method::GET, path, None).await;
        (res.status, res.body)
    }

    pub async fn post_json(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let res = self.send_json(Method::POST, path, body).await;
        (res.status, res.body)
    }

    pub async fn patch_json(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let res = self.send_json(Method::PATCH, path, body).await;
        (res.status, res.body)
    }

    pub async fn put_json(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let res = self.send_json(Method::PUT, path, body).await;
        (res.status, res.body)
    }

    pub async fn delete(&self, path: &str) -> (StatusCode, Value) {
        let res = self.request(Method::DELETE, path, None).await;
        (res.status, res.body)
    }

    pub async fn post_form(&self, path: &str, form: &str) -> (StatusCode, Value) {
        let res = self
            .request(
                Method::POST,
                path,
                Some((
                    "application/x-www-form-urlencoded",
                    form.as_bytes().to_vec(),
                )),
            )
            .await;
        (res.status, res.body)
    }

    pub async fn post_raw(&self, path: &str, content_type: &str, body: &str) -> TestResponse {
        self.request(
            Method::POST,
            path,
            Some((content_type, body.as_bytes().to_vec())),
        )
        .await
    }

    pub async fn get_text(&self, path: &str) -> (StatusCode, String) {
        let (status, _, bytes) = self.raw(Method::GET, path, None).await;
        let text = String::from_utf8(bytes).expect("response is not valid utf-8 text");
        (status, text)
    }

    async fn send_json(&self, method: Method, path: &str, body: Value) -> TestResponse {
        let bytes = serde_json::to_vec(&body).expect("failed to serialize request body");
        self.request(method, path, Some(("application/json", bytes)))
            .await
    }

    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<(&str, Vec<u8>)>,
    ) -> TestResponse {
        let (status, content_type, bytes) = self.raw(method, path, body).await;

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response is not valid json")
        };

        TestResponse {
            status,
            content_type,
            body,
        }
    }

    async fn raw(
        &self,
        method: Method,
        path: &str,
        body: Option<(&str, Vec<u8>)>,
    ) -> (StatusCode, Option<String>, Vec<u8>) {
        let mut req_builder = Request::builder()
            .method(method)
            .uri(path)
            .header(header::HOST, TEST_HOST);

        let body = match body {
            Some((content_type, bytes)) => {
                req_builder = req_builder.header(header::CONTENT_TYPE, content_type);
                Body::from(bytes)
            }
            None => Body::empty(),
        };

        let req = req_builder.body(body).expect("failed to build request");
        let response = self
            .app
            .clone()
            .oneshot(req)
            .await
            .expect("request execution failed");

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("failed to read response body");

        (status, content_type, bytes.to_vec())
    }
}
