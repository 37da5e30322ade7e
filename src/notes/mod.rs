pub mod http;
pub mod pagination;
pub mod query;
pub mod repo;
pub mod service;
pub mod validate;
