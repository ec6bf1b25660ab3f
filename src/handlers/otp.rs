use axum::{extract::State, Json};
use validator::Validate;

use crate::dtos::otp_dtos::{OtpResponse, SendOtpRequest, VerifyOtpRequest};
use crate::errors::Result;
use crate::state::AppState;

// POST /send-otp
pub async fn send_otp(
    State(state): State<AppState>,
    Json(req): Json<SendOtpRequest>,
) -> Result<Json<OtpResponse>> {
    tracing::info!(email = ?req.email, "Received OTP request");
    req.validate()?;

    state
        .otp_service
        .issue(req.email.as_deref(), req.captcha_token.as_deref())
        .await?;

    Ok(Json(OtpResponse {
        ok: true,
        message: "OTP sent".to_string(),
    }))
}

// POST /verify-otp
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(req): Json<VerifyOtpRequest>,
) -> Result<Json<OtpResponse>> {
    tracing::info!(email = ?req.email, "Received OTP verification request");
    req.validate()?;

    state
        .otp_service
        .verify(req.email.as_deref(), req.otp.as_deref())
        .await?;

    Ok(Json(OtpResponse {
        ok: true,
        message: "OTP verified".to_string(),
    }))
}
