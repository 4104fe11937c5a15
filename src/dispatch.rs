use crate::domain::{AccountCreatedEvent, WelcomeEmail};
use crate::email_client::EmailClient;

/// The delivery provider could not be reached or rejected the send.
///
/// Network failures, authentication rejections, undeliverable recipients and
/// rate limiting all land here; callers do not distinguish between them.
#[derive(Debug, thiserror::Error)]
#[error("Failed to deliver the welcome email: {0}")]
pub struct DeliveryError(#[from] reqwest::Error);

/// Sends the welcome email for one freshly created account.
///
/// Builds exactly one message per event and makes exactly one provider call;
/// there is no record of prior sends, so a redelivered event sends again.
/// Best-effort by design: the returned outcome is for the caller to log,
/// nothing here retries or escalates.
pub async fn dispatch_welcome_email(
    event: &AccountCreatedEvent,
    email_client: &EmailClient,
) -> Result<(), DeliveryError> {
    let email = WelcomeEmail::for_account(event);
    email_client
        .send_email(&email.recipient, email.subject, &email.html)
        .await?;

    Ok(())
}
