use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::Result;
use crate::models::otp::OtpEntry;

pub mod memory;

pub use memory::MemoryOtpStore;

/// Storage contract for OTP entries, keyed by email address.
///
/// Expiry is the caller's responsibility: `get` returns whatever is stored,
/// stale or not. A volatile backing loses everything on restart, which is
/// acceptable for login OTPs.
#[async_trait]
pub trait OtpStore: Send + Sync {
    /// Create or replace the entry for `email`. Overwriting is not an error.
    async fn put(&self, email: &str, code: &str, issued_at: DateTime<Utc>) -> Result<()>;

    /// Fetch the entry for `email`, if one is stored.
    async fn get(&self, email: &str) -> Result<Option<OtpEntry>>;

    /// Remove the entry for `email`. Removing a missing entry is not an error.
    async fn delete(&self, email: &str) -> Result<()>;
}
