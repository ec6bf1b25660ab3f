use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::captcha_service::{CaptchaVerifier, HttpCaptchaVerifier};
use crate::services::email_service::{EmailSender, SmtpEmailSender};
use crate::services::otp_service::OtpService;
use crate::store::{MemoryOtpStore, OtpStore};

#[derive(Clone)]
pub struct AppState {
    pub otp_service: Arc<OtpService>,
}

impl AppState {
    pub fn new(otp_service: Arc<OtpService>) -> Self {
        AppState { otp_service }
    }

    /// Wire the service from configuration. Missing credentials disable the
    /// affected collaborator with a loud log instead of exiting; requests
    /// that need it then fail with `server_misconfigured`.
    pub fn from_config(config: &AppConfig) -> Self {
        let store: Arc<dyn OtpStore> = Arc::new(MemoryOtpStore::default());

        let email_sender: Option<Arc<dyn EmailSender>> = match (
            config.smtp_host.as_deref(),
            config.smtp_user.as_deref(),
            config.smtp_pass.as_deref(),
            config.smtp_from.as_deref(),
        ) {
            (Some(host), Some(user), Some(pass), Some(from)) => {
                match SmtpEmailSender::new(host, user, pass, from) {
                    Ok(sender) => Some(Arc::new(sender) as Arc<dyn EmailSender>),
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to build SMTP transport; OTP delivery is disabled");
                        None
                    }
                }
            }
            _ => {
                tracing::error!("SMTP is not configured; OTP delivery is disabled");
                None
            }
        };

        let captcha: Option<Arc<dyn CaptchaVerifier>> = match config.captcha_secret.clone() {
            Some(secret) => Some(Arc::new(HttpCaptchaVerifier::new(
                secret,
                config.captcha_verify_url.clone(),
            ))),
            None => {
                tracing::error!("CAPTCHA_SECRET is not set; issuance with a token will fail closed");
                None
            }
        };

        AppState::new(Arc::new(OtpService::new(store, email_sender, captcha)))
    }
}
