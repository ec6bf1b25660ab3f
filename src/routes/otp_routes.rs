use axum::{routing::post, Router};

use crate::{handlers::otp, state::AppState};

pub fn otp_routes() -> Router<AppState> {
    Router::new()
        // Issue an OTP and email it
        .route("/send-otp", post(otp::send_otp))

        // Verify a submitted OTP
        .route("/verify-otp", post(otp::verify_otp))
}
