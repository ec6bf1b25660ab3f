use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// How long an issued code stays valid.
pub const OTP_TTL_MINUTES: i64 = 5;

/// One live OTP per email address. A new issuance replaces any prior entry;
/// verification only ever deletes, never mutates.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OtpEntry {
    pub email: String,
    pub code: String,       // 6-digit OTP
    pub issued_at: DateTime<Utc>, // when the OTP was created
}

impl OtpEntry {
    pub fn new(email: impl Into<String>, code: impl Into<String>, issued_at: DateTime<Utc>) -> Self {
        Self {
            email: email.into(),
            code: code.into(),
            issued_at,
        }
    }

    /// An entry older than the TTL is logically dead even if still stored.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.issued_at > Duration::minutes(OTP_TTL_MINUTES)
    }
}
