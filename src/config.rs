// config.rs
use std::env;

use crate::services::captcha_service::DEFAULT_CAPTCHA_VERIFY_URL;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub smtp_host: Option<String>,
    pub smtp_user: Option<String>,
    pub smtp_pass: Option<String>,
    pub smtp_from: Option<String>,
    pub captcha_secret: Option<String>,
    pub captcha_verify_url: String,
    pub cors_origin: Option<String>,
    pub host: String,
    pub port: u16,
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

impl AppConfig {
    pub fn from_env() -> Self {
        let smtp_user = optional_var("SMTP_USER");
        // Sender identity defaults to the SMTP account (Gmail-style setups).
        let smtp_from = optional_var("SMTP_FROM").or_else(|| smtp_user.clone());

        AppConfig {
            smtp_host: optional_var("SMTP_HOST"),
            smtp_user,
            smtp_pass: optional_var("SMTP_PASS"),
            smtp_from,
            captcha_secret: optional_var("CAPTCHA_SECRET"),
            captcha_verify_url: optional_var("CAPTCHA_VERIFY_URL")
                .unwrap_or_else(|| DEFAULT_CAPTCHA_VERIFY_URL.to_string()),
            cors_origin: optional_var("CORS_ORIGIN"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
        }
    }

    /// Required variables that are absent. Reported loudly at startup but the
    /// process keeps serving; the affected operations fail per request.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.smtp_host.is_none() {
            missing.push("SMTP_HOST");
        }
        if self.smtp_user.is_none() {
            missing.push("SMTP_USER");
        }
        if self.smtp_pass.is_none() {
            missing.push("SMTP_PASS");
        }
        if self.captcha_secret.is_none() {
            missing.push("CAPTCHA_SECRET");
        }
        if self.cors_origin.is_none() {
            missing.push("CORS_ORIGIN");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> AppConfig {
        AppConfig {
            smtp_host: Some("smtp.gmail.com".into()),
            smtp_user: Some("bot@example.com".into()),
            smtp_pass: Some("app-password".into()),
            smtp_from: Some("bot@example.com".into()),
            captcha_secret: Some("0xsecret".into()),
            captcha_verify_url: DEFAULT_CAPTCHA_VERIFY_URL.to_string(),
            cors_origin: Some("https://app.example.com".into()),
            host: "0.0.0.0".into(),
            port: 3000,
        }
    }

    #[test]
    fn complete_config_has_nothing_missing() {
        assert!(full_config().missing_required().is_empty());
    }

    #[test]
    fn every_absent_secret_is_reported() {
        let config = AppConfig {
            smtp_pass: None,
            captcha_secret: None,
            cors_origin: None,
            ..full_config()
        };
        assert_eq!(
            config.missing_required(),
            vec!["SMTP_PASS", "CAPTCHA_SECRET", "CORS_ORIGIN"]
        );
    }
}
