use serde::{Deserialize, Serialize};
use validator::Validate;

// Fields are optional so a missing field surfaces as `invalid_input` rather
// than a deserialization rejection; the service applies the same checks for
// direct callers.
#[derive(Debug, Deserialize, Validate)]
pub struct SendOtpRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: Option<String>,

    pub captcha_token: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: Option<String>,

    #[validate(length(min = 1, message = "OTP is required"))]
    pub otp: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OtpResponse {
    pub ok: bool,
    pub message: String,
}
