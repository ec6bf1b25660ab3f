pub mod captcha_service;
pub mod email_service;
pub mod otp_service;
