//! Core domain entities.
//!
//! - [`UrlRecord`] - A stored short code to URL mapping
//! - [`NewUrlRecord`] - Insert payload for a new mapping
//! - [`RecordState`] - Whether a stored record may still be resolved

pub mod url_record;

pub use url_record::{NewUrlRecord, RecordState, UrlRecord};
