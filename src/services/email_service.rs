use async_trait::async_trait;
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::errors::{AppError, Result};

/// Outbound email delivery. Implementations report success or failure and
/// never retry; a failed send surfaces as `DeliveryFailed`.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, to: &str, subject: &str, text_body: &str, html_body: &str)
        -> Result<()>;
}

/// SMTP delivery via lettre with STARTTLS and credentials.
pub struct SmtpEmailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl SmtpEmailSender {
    pub fn new(host: &str, user: &str, pass: &str, from: &str) -> Result<Self> {
        let creds = Credentials::new(user.to_string(), pass.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
            .map_err(|e| {
                AppError::ServerMisconfigured(format!("Failed to create SMTP transport: {}", e))
            })?
            .credentials(creds)
            .build();

        Ok(Self {
            transport,
            from: from.to_string(),
        })
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send(
        &self,
        to: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> Result<()> {
        let from: Mailbox = self.from.parse().map_err(|e| {
            AppError::ServerMisconfigured(format!("Invalid sender address: {}", e))
        })?;
        let to: Mailbox = to
            .parse()
            .map_err(|e| AppError::DeliveryFailed(format!("Invalid recipient address: {}", e)))?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(subject)
            .multipart(MultiPart::alternative_plain_html(
                text_body.to_string(),
                html_body.to_string(),
            ))
            .map_err(|e| AppError::DeliveryFailed(format!("Failed to build email: {}", e)))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| AppError::DeliveryFailed(e.to_string()))?;

        Ok(())
    }
}
