//! In-process implementation of the URL repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    next_id: i64,
    records: BTreeMap<i64, UrlRecord>,
    by_short: HashMap<String, i64>,
}

/// Volatile repository backed by a mutex-guarded map.
///
/// Every operation runs inside one critical section, which makes each of
/// them atomic with respect to the others. Contents are lost on restart.
///
/// # Use Cases
///
/// - Local development without PostgreSQL (`STORAGE_BACKEND=memory`)
/// - Handler and service integration tests
#[derive(Default)]
pub struct MemoryUrlRepository {
    inner: Mutex<Inner>,
}

impl MemoryUrlRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, AppError> {
        self.inner
            .lock()
            .map_err(|_| AppError::internal("In-memory store is poisoned", json!({})))
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let mut inner = self.lock()?;

        if inner.by_short.contains_key(&new_record.short) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "urls_short_key" }),
            ));
        }

        inner.next_id += 1;
        let record = UrlRecord::new(
            inner.next_id,
            new_record.original,
            new_record.short,
            0,
            new_record.expires_at,
            Utc::now(),
        );

        inner.by_short.insert(record.short.clone(), record.id);
        inner.records.insert(record.id, record.clone());

        Ok(record)
    }

    async fn find_by_short(&self, short: &str) -> Result<Option<UrlRecord>, AppError> {
        let inner = self.lock()?;

        Ok(inner
            .by_short
            .get(short)
            .and_then(|id| inner.records.get(id))
            .cloned())
    }

    async fn increment_visit(&self, id: i64) -> Result<UrlRecord, AppError> {
        let mut inner = self.lock()?;

        let record = inner
            .records
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Record not found", json!({ "id": id })))?;
        record.visit_count += 1;

        Ok(record.clone())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let mut inner = self.lock()?;

        match inner.records.remove(&id) {
            Some(record) => {
                inner.by_short.remove(&record.short);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        let inner = self.lock()?;

        let mut records: Vec<UrlRecord> = inner.records.values().cloned().collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(records)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.lock().map(|_| ())
    }
}
