//! HTML template rendering handlers.

mod index;

pub use index::{IndexTemplate, RecordView, index_handler};
