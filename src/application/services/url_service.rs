//! Short code lifecycle: create, resolve, delete and list.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde_json::json;

use crate::domain::entities::{NewUrlRecord, RecordState, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code, is_reserved};

/// Longest accepted original URL, in bytes.
pub const MAX_URL_LENGTH: usize = 2048;

/// Tunables for [`UrlService`].
#[derive(Debug, Clone)]
pub struct UrlServiceConfig {
    /// Characters in each generated short code.
    pub code_length: usize,
    /// Codes tried per create before giving up on collisions.
    pub max_code_attempts: usize,
    /// Upper bound on a single store call.
    pub store_timeout: Duration,
}

impl Default for UrlServiceConfig {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            max_code_attempts: 10,
            store_timeout: Duration::from_secs(5),
        }
    }
}

/// Service owning the lifecycle of short code records.
///
/// A record is `Active` until its expiry passes, then `Expired` (still stored,
/// rejected on resolve), and `Deleted` once removed. Deleted is terminal.
///
/// The service never logs; every outcome is returned to the caller as a
/// typed result.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    config: UrlServiceConfig,
}

impl UrlService {
    /// Creates a new service over an explicitly constructed store.
    pub fn new(repository: Arc<dyn UrlRepository>, config: UrlServiceConfig) -> Self {
        Self { repository, config }
    }

    /// Shortens `original`, optionally expiring after `expire_minutes`.
    ///
    /// `Some(0)` and `None` both mean the record never expires. A negative
    /// value produces a record that is already expired.
    ///
    /// # Code Generation
    ///
    /// A fresh code is generated and inserted. If the store reports a
    /// conflict (or the code is reserved) a new code is generated, up to
    /// `max_code_attempts` times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty, too long, not an
    /// http(s) URL, or the expiry is out of range. Input without a scheme is
    /// stored with `https://` prepended.
    ///
    /// Returns [`AppError::Internal`] if every attempt collided.
    pub async fn create(
        &self,
        original: &str,
        expire_minutes: Option<i64>,
    ) -> Result<UrlRecord, AppError> {
        let original = validate_original(original)?;
        let expires_at = expiry_from_minutes(Utc::now(), expire_minutes)?;

        for _ in 0..self.config.max_code_attempts {
            let short = generate_code(self.config.code_length);
            if is_reserved(&short) {
                continue;
            }

            let new_record = NewUrlRecord {
                original: original.clone(),
                short,
                expires_at,
            };

            match self.bounded(self.repository.insert(new_record)).await {
                Ok(record) => return Ok(record),
                Err(AppError::Conflict { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({
                "reason": "Too many collisions",
                "attempts": self.config.max_code_attempts,
            }),
        ))
    }

    /// Resolves a short code for redirection and counts the visit.
    ///
    /// The counter is incremented by the store in a single atomic operation,
    /// exactly once per successful call.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown (or was deleted
    /// between lookup and increment).
    ///
    /// Returns [`AppError::Expired`] if `expires_at` is strictly in the past.
    /// The record is kept.
    pub async fn resolve(&self, short: &str) -> Result<UrlRecord, AppError> {
        let record = self.find(short).await?;

        if record.state_at(Utc::now()) == RecordState::Expired {
            return Err(AppError::expired(
                "Short link expired",
                json!({ "short": short, "expires_at": record.expires_at }),
            ));
        }

        self.bounded(self.repository.increment_visit(record.id))
            .await
            .map_err(|e| match e {
                AppError::NotFound { .. } => short_not_found(short),
                other => other,
            })
    }

    /// Looks up a record without counting a visit or checking expiry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    pub async fn find(&self, short: &str) -> Result<UrlRecord, AppError> {
        self.bounded(self.repository.find_by_short(short))
            .await?
            .ok_or_else(|| short_not_found(short))
    }

    /// Deletes a record by id.
    ///
    /// Deletion is idempotent: removing an id that does not exist succeeds.
    /// The returned flag tells whether anything was actually removed.
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        self.bounded(self.repository.delete_by_id(id)).await
    }

    /// Lists every record, newest first.
    pub async fn list(&self) -> Result<Vec<UrlRecord>, AppError> {
        self.bounded(self.repository.list_all()).await
    }

    /// Checks that the store answers within the configured timeout.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.bounded(self.repository.ping()).await
    }

    /// Runs a store call under the configured timeout.
    async fn bounded<T>(
        &self,
        op: impl Future<Output = Result<T, AppError>>,
    ) -> Result<T, AppError> {
        tokio::time::timeout(self.config.store_timeout, op)
            .await
            .map_err(|_| {
                AppError::unavailable(
                    "Store operation timed out",
                    json!({
                        "timeout_ms": self.config.store_timeout.as_millis() as u64,
                        "retryable": true,
                    }),
                )
            })?
    }
}

fn short_not_found(short: &str) -> AppError {
    AppError::not_found("Short link not found", json!({ "short": short }))
}

/// Trims and checks a URL submitted for shortening.
fn validate_original(original: &str) -> Result<String, AppError> {
    let original = original.trim();

    if original.is_empty() {
        return Err(AppError::bad_request("URL required", json!({})));
    }

    if original.len() > MAX_URL_LENGTH {
        return Err(AppError::bad_request(
            "URL is too long",
            json!({ "max_length": MAX_URL_LENGTH, "provided_length": original.len() }),
        ));
    }

    // "www.example.com" has no scheme; store it as https.
    let original = match url::Url::parse(original) {
        Err(url::ParseError::RelativeUrlWithoutBase) => format!("https://{}", original),
        _ => original.to_string(),
    };

    let parsed = url::Url::parse(&original).map_err(|e| {
        AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AppError::bad_request(
            "Only http and https URLs can be shortened",
            json!({ "scheme": parsed.scheme() }),
        ));
    }

    Ok(original)
}

/// Computes `now + minutes`, treating `None` and zero as "never expires".
fn expiry_from_minutes(
    now: DateTime<Utc>,
    minutes: Option<i64>,
) -> Result<Option<DateTime<Utc>>, AppError> {
    let Some(minutes) = minutes.filter(|m| *m != 0) else {
        return Ok(None);
    };

    TimeDelta::try_minutes(minutes)
        .and_then(|delta| now.checked_add_signed(delta))
        .map(Some)
        .ok_or_else(|| {
            AppError::bad_request(
                "expireMinutes is out of range",
                json!({ "expire_minutes": minutes }),
            )
        })
}
