// src/errors.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Captcha verification failed")]
    VerificationFailed,

    #[error("Server configuration error: {0}")]
    ServerMisconfigured(String),

    #[error("Failed to send OTP")]
    DeliveryFailed(String),

    #[error("Failed to save OTP")]
    Storage(String),

    #[error("Invalid OTP or session expired")]
    NotFoundOrExpired,

    #[error("OTP has expired. Please request a new one.")]
    Expired,

    #[error("Invalid OTP")]
    InvalidCode,
}

impl AppError {
    /// Machine-readable reason code carried in every error response.
    pub fn reason(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::VerificationFailed => "verification_failed",
            AppError::ServerMisconfigured(_) => "server_misconfigured",
            AppError::DeliveryFailed(_) => "delivery_failed",
            AppError::Storage(_) => "storage_failed",
            AppError::NotFoundOrExpired => "not_found_or_expired",
            AppError::Expired => "expired",
            AppError::InvalidCode => "invalid_code",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::VerificationFailed => StatusCode::BAD_REQUEST,
            AppError::ServerMisconfigured(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::DeliveryFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFoundOrExpired => StatusCode::BAD_REQUEST,
            AppError::Expired => StatusCode::BAD_REQUEST,
            AppError::InvalidCode => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "ok": false,
            "reason": self.reason(),
            "message": self.to_string(),
        }));

        (self.status(), body).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
