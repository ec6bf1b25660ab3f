use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::errors::Result;
use crate::models::otp::OtpEntry;
use crate::store::OtpStore;

/// Process-local OTP storage. All entries are lost on restart.
#[derive(Default)]
pub struct MemoryOtpStore {
    entries: Mutex<HashMap<String, OtpEntry>>,
}

#[async_trait]
impl OtpStore for MemoryOtpStore {
    async fn put(&self, email: &str, code: &str, issued_at: DateTime<Utc>) -> Result<()> {
        let mut entries = self.entries.lock().await;
        entries.insert(email.to_string(), OtpEntry::new(email, code, issued_at));
        Ok(())
    }

    async fn get(&self, email: &str) -> Result<Option<OtpEntry>> {
        let entries = self.entries.lock().await;
        Ok(entries.get(email).cloned())
    }

    async fn delete(&self, email: &str) -> Result<()> {
        let mut entries = self.entries.lock().await;
        entries.remove(email);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[tokio::test]
    async fn put_then_get_returns_entry() {
        let store = MemoryOtpStore::default();
        let now = Utc::now();
        store.put("user@example.com", "123456", now).await.unwrap();

        let entry = store.get("user@example.com").await.unwrap().unwrap();
        assert_eq!(entry.email, "user@example.com");
        assert_eq!(entry.code, "123456");
        assert_eq!(entry.issued_at, now);
    }

    #[tokio::test]
    async fn put_overwrites_existing_entry() {
        let store = MemoryOtpStore::default();
        let now = Utc::now();
        store.put("user@example.com", "111111", now).await.unwrap();
        store.put("user@example.com", "222222", now).await.unwrap();

        let entry = store.get("user@example.com").await.unwrap().unwrap();
        assert_eq!(entry.code, "222222");
    }

    #[tokio::test]
    async fn get_does_not_expire_stale_entries() {
        let store = MemoryOtpStore::default();
        let long_ago = Utc::now() - Duration::hours(1);
        store.put("user@example.com", "123456", long_ago).await.unwrap();

        // Staleness is the caller's problem; the store keeps the entry.
        assert!(store.get("user@example.com").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = MemoryOtpStore::default();
        store.delete("nobody@example.com").await.unwrap();

        store.put("user@example.com", "123456", Utc::now()).await.unwrap();
        store.delete("user@example.com").await.unwrap();
        assert!(store.get("user@example.com").await.unwrap().is_none());
        store.delete("user@example.com").await.unwrap();
    }

    #[tokio::test]
    async fn emails_are_case_sensitive_keys() {
        let store = MemoryOtpStore::default();
        store.put("User@Example.com", "123456", Utc::now()).await.unwrap();
        assert!(store.get("user@example.com").await.unwrap().is_none());
    }
}
