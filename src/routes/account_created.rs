use actix_web::{post, web, HttpResponse};

use crate::dispatch::dispatch_welcome_email;
use crate::domain::AccountCreatedEvent;
use crate::email_client::EmailClient;

/// Receives an account-creation event from the identity subsystem and sends
/// the new user a welcome email.
///
/// The identity subsystem does not block on, inspect, or roll back anything
/// based on this handler, so delivery failures are logged and swallowed and
/// the response is `200 OK` either way.
#[tracing::instrument(
    name = "Handling an account creation event",
    skip(event, email_client),
    fields(account_email = %event.email)
)]
#[post("/account_created")]
pub async fn account_created(
    event: web::Json<AccountCreatedEvent>,
    email_client: web::Data<EmailClient>,
) -> HttpResponse {
    match dispatch_welcome_email(&event, &email_client).await {
        Ok(()) => tracing::info!("Correo de bienvenida enviado a {}", event.email),
        Err(error) => tracing::error!("Error al enviar el correo: {}", error),
    }

    HttpResponse::Ok().finish()
}
