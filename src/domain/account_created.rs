use serde::Deserialize;

/// Name used in the welcome email when the account has no usable display name.
pub const DEFAULT_DISPLAY_NAME: &str = "Usuario";

/// Notification emitted by the identity subsystem when a new user account is
/// provisioned. Consumed once per occurrence; never stored.
///
/// The event's fields are taken as-is. The only massaging we do is falling
/// back to a placeholder display name, see [`AccountCreatedEvent::display_name`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountCreatedEvent {
    pub email: String,
    display_name: Option<String>,
}

impl AccountCreatedEvent {
    /// The name to greet the new user by.
    ///
    /// Accounts created through some sign-up paths carry no display name,
    /// or carry an empty one; both get the placeholder.
    pub fn display_name(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_DISPLAY_NAME,
        }
    }
}
