use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::errors::{AppError, Result};

pub const DEFAULT_CAPTCHA_VERIFY_URL: &str = "https://api.hcaptcha.com/siteverify";

/// Human-verification challenge provider: given a client-supplied token,
/// reports pass or fail.
#[async_trait]
pub trait CaptchaVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<bool>;
}

#[derive(Debug, Deserialize)]
struct SiteverifyResponse {
    success: bool,
}

/// Verifies challenge tokens against the provider's siteverify endpoint.
pub struct HttpCaptchaVerifier {
    client: Client,
    secret: String,
    verify_url: String,
}

impl HttpCaptchaVerifier {
    pub fn new(secret: String, verify_url: String) -> Self {
        Self {
            client: Client::new(),
            secret,
            verify_url,
        }
    }
}

#[async_trait]
impl CaptchaVerifier for HttpCaptchaVerifier {
    async fn verify(&self, token: &str) -> Result<bool> {
        // Fail closed: any provider error counts as a failed check.
        let response = self
            .client
            .post(&self.verify_url)
            .form(&[("secret", self.secret.as_str()), ("response", token)])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Captcha provider request failed");
                AppError::VerificationFailed
            })?;

        if !response.status().is_success() {
            tracing::error!(
                status = %response.status(),
                "Captcha provider returned an error status"
            );
            return Err(AppError::VerificationFailed);
        }

        let body: SiteverifyResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Captcha provider returned an unreadable body");
            AppError::VerificationFailed
        })?;

        Ok(body.success)
    }
}
