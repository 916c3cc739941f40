//! Repository trait for short code mapping storage.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Durable association from short code to [`UrlRecord`].
///
/// Every method is independently atomic. There are no multi-record
/// transactions.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Persists a new record and returns it with its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists.
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on storage errors.
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Finds a record by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlRecord))` if found
    /// - `Ok(None)` if not found
    async fn find_by_short(&self, short: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Atomically increments the visit counter and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    async fn increment_visit(&self, id: i64) -> Result<UrlRecord, AppError>;

    /// Removes a record.
    ///
    /// Returns `Ok(true)` if a record was removed, `Ok(false)` if none existed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Lists every record, newest first.
    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
