use super::AccountCreatedEvent;

/// Subject line for every welcome email.
pub const WELCOME_SUBJECT: &str = "¡Gracias por registrarte a Ruta U!";

/// The welcome message for one freshly created account. Built once per
/// event, handed to the email client, and dropped; we keep no record of it.
///
/// The sender is not part of this value. It is fixed configuration attached
/// by the email client when the message goes out on the wire.
pub struct WelcomeEmail {
    pub recipient: String,
    pub subject: &'static str,
    pub html: String,
}

impl WelcomeEmail {
    /// Builds the welcome email for `event`. The recipient is the event's
    /// email address, unmodified.
    pub fn for_account(event: &AccountCreatedEvent) -> Self {
        Self {
            recipient: event.email.clone(),
            subject: WELCOME_SUBJECT,
            html: welcome_body(event.display_name()),
        }
    }
}

/// Renders the HTML body, greeting the new user by `display_name`.
fn welcome_body(display_name: &str) -> String {
    format!(
        "<h1>¡Hola, {display_name}!</h1>\
        <p>\
        ¡Hola! Gracias por registrarte a Ruta U, de acuerdo al rol \
        que elijas podrás acceder a nuestras funcionalidades. \
        Estamos emocionados de tenerte a bordo y esperamos que \
        disfrutes de la experiencia. Si tienes alguna pregunta o \
        necesitas ayuda, no dudes en contactarnos.\
        <br><br>\
        ¡Bienvenido a la comunidad de Ruta U!\
        <br><br>\
        Saludos cordiales,\
        <br>\
        El equipo de Ruta U\
        </p>"
    )
}
