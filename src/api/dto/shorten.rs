//! DTOs for the shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, NoneAsEmptyString, PickFirst, serde_as};
use validator::{Validate, ValidationError};

use crate::domain::entities::UrlRecord;

/// Largest accepted expiry offset in either direction (100 years).
pub const MAX_EXPIRE_MINUTES: i64 = 100 * 365 * 24 * 60;

/// Request body for `POST /shorten`.
///
/// `expireMinutes` accepts a number or a numeric string, since HTML form
/// values arrive as strings. `null`, absent, `""` and `0` all mean "never
/// expires".
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The URL to shorten. Missing and empty are rejected by the service.
    #[serde(default)]
    pub original: Option<String>,

    #[serde_as(as = "PickFirst<(Option<PickFirst<(_, DisplayFromStr)>>, NoneAsEmptyString)>")]
    #[serde(default)]
    #[validate(custom(function = "validate_expire_minutes"))]
    pub expire_minutes: Option<i64>,
}

fn validate_expire_minutes(minutes: i64) -> Result<(), ValidationError> {
    if minutes.unsigned_abs() > MAX_EXPIRE_MINUTES.unsigned_abs() {
        return Err(ValidationError::new("range")
            .with_message("expireMinutes must be within 100 years".into()));
    }
    Ok(())
}

/// A stored record as returned by the API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlRecordResponse {
    pub id: i64,
    pub original: String,
    pub short: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
    pub visit_count: i64,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl UrlRecordResponse {
    /// Builds the response, deriving `shortUrl` from `base_url` when known.
    pub fn from_record(record: UrlRecord, base_url: Option<&str>) -> Self {
        let short_url = base_url.map(|base| format!("{}/{}", base.trim_end_matches('/'), record.short));

        Self {
            id: record.id,
            original: record.original,
            short: record.short,
            short_url,
            visit_count: record.visit_count,
            expires_at: record.expires_at,
            created_at: record.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_expire_minutes_accepts_number_and_string() {
        let numeric: ShortenRequest =
            serde_json::from_value(json!({ "original": "https://a.example", "expireMinutes": 60 }))
                .unwrap();
        assert_eq!(numeric.expire_minutes, Some(60));

        let text: ShortenRequest = serde_json::from_value(
            json!({ "original": "https://a.example", "expireMinutes": "1440" }),
        )
        .unwrap();
        assert_eq!(text.expire_minutes, Some(1440));

        let null: ShortenRequest =
            serde_json::from_value(json!({ "original": "https://a.example", "expireMinutes": null }))
                .unwrap();
        assert_eq!(null.expire_minutes, None);

        let absent: ShortenRequest =
            serde_json::from_value(json!({ "original": "https://a.example" })).unwrap();
        assert_eq!(absent.expire_minutes, None);
    }

    #[test]
    fn test_empty_expire_minutes_means_never() {
        let request: ShortenRequest = serde_json::from_value(
            json!({ "original": "https://a.example", "expireMinutes": "" }),
        )
        .unwrap();
        assert_eq!(request.expire_minutes, None);

        let result: Result<ShortenRequest, _> = serde_json::from_value(
            json!({ "original": "https://a.example", "expireMinutes": "soon" }),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_original_deserializes_as_none() {
        let request: ShortenRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.original.is_none());
    }

    #[test]
    fn test_expire_minutes_range_is_validated() {
        let request: ShortenRequest = serde_json::from_value(
            json!({ "original": "https://a.example", "expireMinutes": MAX_EXPIRE_MINUTES + 1 }),
        )
        .unwrap();
        assert!(request.validate().is_err());

        let request: ShortenRequest = serde_json::from_value(
            json!({ "original": "https://a.example", "expireMinutes": -1 }),
        )
        .unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_response_is_camel_case() {
        let now = Utc::now();
        let record = UrlRecord::new(
            3,
            "https://a.example".to_string(),
            "abc123".to_string(),
            0,
            None,
            now,
        );

        let value =
            serde_json::to_value(UrlRecordResponse::from_record(record, Some("http://localhost:5000/")))
                .unwrap();

        assert_eq!(value["id"], 3);
        assert_eq!(value["short"], "abc123");
        assert_eq!(value["shortUrl"], "http://localhost:5000/abc123");
        assert_eq!(value["visitCount"], 0);
        assert!(value["expiresAt"].is_null());
        assert!(value.get("createdAt").is_some());
    }
}
