use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use url::Url;

use crate::domain::SenderEmail;

/// An email client that can send email to recipients on our behalf.
///
/// Long-lived and stateless: one instance is built at startup and shared by
/// every dispatch.
pub struct EmailClient {
    sender: SenderEmail,
    http_client: Client,
    base_url: Url,
    authorization_token: Secret<String>,
}

impl EmailClient {
    /// Creates an email client. Emails will be sent from `sender`.
    ///
    /// `base_url` is the delivery provider's API root. `authorization_token`
    /// is the provider API key used to authorize all requests.
    pub fn new(
        base_url: Url,
        sender: SenderEmail,
        authorization_token: Secret<String>,
    ) -> Self {
        Self {
            sender,
            base_url,
            http_client: Client::new(),
            authorization_token,
        }
    }

    /// Sends an HTML email to `recipient`. The subject line will be `subject`.
    ///
    /// `recipient` is forwarded to the provider exactly as given; an
    /// undeliverable address surfaces as a provider rejection, not an error
    /// on our side before the call.
    ///
    /// Returns an `Err` if the request cannot be made or the provider
    /// responds with a non-success status.
    pub async fn send_email(
        &self,
        recipient: &str,
        subject: &str,
        html_content: &str,
    ) -> Result<(), reqwest::Error> {
        let url = self.base_url.join("email").unwrap();
        let body = SendEmailRequest {
            from: self.sender.as_ref(),
            to: recipient,
            subject,
            html: html_content,
        };

        self.http_client
            .post(url)
            .header(
                "Authorization",
                format!("Bearer {}", self.authorization_token.expose_secret()),
            )
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

/// The request body shape the delivery provider's send endpoint accepts
#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}
