//! DocJSON: hypermedia documents that carry their own links and forms.

pub mod assembler;
pub mod document;
mod error_document;
pub mod links;
mod response;

pub use assembler::Assembler;
pub use document::{Document, ErrorDocument, NoteList};
pub use error_document::FieldErrors;
pub use links::Links;
pub use response::{DOCJSON_MEDIA_TYPE, DocJson};
