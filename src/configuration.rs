use secrecy::Secret;
use serde::Deserialize;

use crate::domain::SenderEmail;

/// App-wide configuration
#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
}

#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

/// Settings for talking to the email delivery provider.
#[derive(Deserialize, Clone)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender_email: String,
    pub authorization_token: Secret<String>,
}

impl EmailClientSettings {
    /// The address welcome emails are sent from. Returns `Err` if the
    /// configured value is not a valid email address.
    pub fn sender(&self) -> Result<SenderEmail, String> {
        SenderEmail::parse(self.sender_email.clone())
    }
}

/// Reads app configuration from the default file location, with `APP__`
/// environment variables layered on top.
///
/// The deployment environment injects the delivery provider's API key as
/// `APP__EMAIL_CLIENT__AUTHORIZATION_TOKEN`; if neither the file nor the
/// environment supplies a value, this returns an error and the process
/// never starts serving.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    config::Config::builder()
        .add_source(config::File::with_name("configuration"))
        .add_source(config::Environment::with_prefix("APP").separator("__"))
        .build()?
        .try_deserialize()
}
