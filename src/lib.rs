use sqlx::SqlitePool;

use crate::config::DocSettings;

pub mod app;
pub mod config;
pub mod core;
pub mod db;
pub mod docjson;
pub mod error;
pub mod extractors;
pub mod notes;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub docs: DocSettings,
}
