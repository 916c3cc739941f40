//! URL record entity representing a short code mapping.

use chrono::{DateTime, Utc};

/// A stored mapping from a short code to its original URL.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlRecord {
    pub id: i64,
    pub original: String,
    pub short: String,
    pub visit_count: i64,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Resolution state of a record that is still present in the store.
///
/// Deleted records have no state: they are simply absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordState {
    Active,
    Expired,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(
        id: i64,
        original: String,
        short: String,
        visit_count: i64,
        expires_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original,
            short,
            visit_count,
            expires_at,
            created_at,
        }
    }

    /// Classifies the record at the given instant.
    ///
    /// A record is expired only once `expires_at < now`; a record whose expiry
    /// equals `now` is still active.
    pub fn state_at(&self, now: DateTime<Utc>) -> RecordState {
        match self.expires_at {
            Some(expires_at) if expires_at < now => RecordState::Expired,
            _ => RecordState::Active,
        }
    }

    /// Returns true if the record has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.state_at(Utc::now()) == RecordState::Expired
    }
}

/// Input data for inserting a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub original: String,
    pub short: String,
    pub expires_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn record_expiring(expires_at: Option<DateTime<Utc>>) -> UrlRecord {
        UrlRecord::new(
            1,
            "https://example.com".to_string(),
            "abc123".to_string(),
            0,
            expires_at,
            Utc::now(),
        )
    }

    #[test]
    fn test_record_creation() {
        let now = Utc::now();
        let record = UrlRecord::new(
            7,
            "https://a.example".to_string(),
            "abc123".to_string(),
            0,
            None,
            now,
        );

        assert_eq!(record.id, 7);
        assert_eq!(record.original, "https://a.example");
        assert_eq!(record.short, "abc123");
        assert_eq!(record.visit_count, 0);
        assert_eq!(record.created_at, now);
        assert!(!record.is_expired());
    }

    #[test]
    fn test_no_expiry_is_always_active() {
        let record = record_expiring(None);
        let far_future = Utc::now() + Duration::days(365 * 100);
        assert_eq!(record.state_at(far_future), RecordState::Active);
    }

    #[test]
    fn test_past_expiry_is_expired() {
        let record = record_expiring(Some(Utc::now() - Duration::seconds(1)));
        assert!(record.is_expired());
    }

    #[test]
    fn test_future_expiry_is_active() {
        let record = record_expiring(Some(Utc::now() + Duration::hours(1)));
        assert!(!record.is_expired());
    }

    #[test]
    fn test_expiry_boundary_is_still_active() {
        let now = Utc::now();
        let record = record_expiring(Some(now));

        assert_eq!(record.state_at(now), RecordState::Active);
        assert_eq!(
            record.state_at(now + Duration::milliseconds(1)),
            RecordState::Expired
        );
    }
}
