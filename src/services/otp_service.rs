use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use rand::{rngs::OsRng, Rng};
use tokio::sync::Mutex;

use crate::errors::{AppError, Result};
use crate::services::captcha_service::CaptchaVerifier;
use crate::services::email_service::EmailSender;
use crate::store::OtpStore;
use crate::templates::{otp_email_html, otp_email_text, OTP_EMAIL_SUBJECT};

/// Generate a 6-digit OTP, uniform over [100000, 999999].
///
/// OsRng is the OS CSPRNG; login codes must not be predictable.
pub fn generate_code() -> String {
    let mut rng = OsRng;
    rng.gen_range(100_000..=999_999).to_string()
}

/// OTP lifecycle: issuance, storage, expiry enforcement, single-use
/// consumption. Store, mailer and captcha provider are injected so the
/// backing pieces can be swapped without touching this logic.
pub struct OtpService {
    store: Arc<dyn OtpStore>,
    email_sender: Option<Arc<dyn EmailSender>>,
    captcha: Option<Arc<dyn CaptchaVerifier>>,
    // Per-email serialization of issue/verify. The store alone keeps single
    // operations atomic, but the read-check-delete sequence in verify() and
    // concurrent issues for one address need a critical section.
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl OtpService {
    pub fn new(
        store: Arc<dyn OtpStore>,
        email_sender: Option<Arc<dyn EmailSender>>,
        captcha: Option<Arc<dyn CaptchaVerifier>>,
    ) -> Self {
        Self {
            store,
            email_sender,
            captcha,
            locks: Mutex::new(HashMap::new()),
        }
    }

    async fn entry_lock(&self, email: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks
            .entry(email.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Issue a fresh OTP for `email` and deliver it by mail.
    ///
    /// A supplied captcha token is checked before anything else; no token
    /// means the check is skipped (resend path — the gap is logged).
    /// Re-issuing replaces any prior code for the address unconditionally.
    /// A failed send leaves the stored code in place.
    pub async fn issue(&self, email: Option<&str>, captcha_token: Option<&str>) -> Result<()> {
        match captcha_token.filter(|t| !t.is_empty()) {
            Some(token) => {
                let verifier = self.captcha.as_ref().ok_or_else(|| {
                    AppError::ServerMisconfigured("CAPTCHA_SECRET is not set".into())
                })?;
                if !verifier.verify(token).await? {
                    tracing::warn!(event = "captcha_failed", "Captcha verification failed");
                    return Err(AppError::VerificationFailed);
                }
            }
            None => {
                tracing::warn!(
                    event = "captcha_skipped",
                    "No captcha token supplied, issuing without challenge"
                );
            }
        }

        let email = match email.filter(|e| !e.is_empty()) {
            Some(e) => e,
            None => return Err(AppError::InvalidInput("Email is required".into())),
        };

        let sender = self.email_sender.as_ref().ok_or_else(|| {
            AppError::ServerMisconfigured("SMTP transport is not configured".into())
        })?;

        let code = generate_code();
        {
            let lock = self.entry_lock(email).await;
            let _guard = lock.lock().await;
            self.store.put(email, &code, Utc::now()).await?;
        }
        tracing::info!(email = %email, event = "otp_issued", "Generated and stored OTP");

        // No rollback on failure: the stored code stays valid even when the
        // mail never went out.
        sender
            .send(email, OTP_EMAIL_SUBJECT, &otp_email_text(&code), &otp_email_html(&code))
            .await
            .map_err(|e| {
                tracing::error!(email = %email, error = %e, "Email send error");
                e
            })?;

        tracing::info!(email = %email, "OTP sent successfully");
        Ok(())
    }

    /// Check a submitted code against the stored entry.
    ///
    /// Expiry is enforced before the code comparison: a stale entry is
    /// deleted and rejected even when the code matches. A mismatch keeps the
    /// entry so the user can retry within the window; a match consumes it.
    pub async fn verify(&self, email: Option<&str>, code: Option<&str>) -> Result<()> {
        let (email, code) = match (
            email.filter(|e| !e.is_empty()),
            code.filter(|c| !c.is_empty()),
        ) {
            (Some(e), Some(c)) => (e, c),
            _ => return Err(AppError::InvalidInput("Email and OTP required".into())),
        };

        let lock = self.entry_lock(email).await;
        let _guard = lock.lock().await;

        let entry = match self.store.get(email).await? {
            Some(entry) => entry,
            None => {
                tracing::warn!(email = %email, event = "otp_not_found", "OTP not found");
                return Err(AppError::NotFoundOrExpired);
            }
        };

        if entry.is_expired(Utc::now()) {
            self.store.delete(email).await?;
            tracing::warn!(email = %email, event = "otp_expired", "Expired OTP");
            return Err(AppError::Expired);
        }

        if entry.code != code {
            tracing::warn!(email = %email, event = "otp_mismatch", "Invalid OTP");
            return Err(AppError::InvalidCode);
        }

        self.store.delete(email).await?;
        tracing::info!(email = %email, event = "otp_verified", "OTP verified successfully");
        Ok(())
    }
}
