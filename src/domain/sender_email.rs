use validator::validate_email;

/// The address welcome emails are sent from. Enforces validity of the
/// configured address, so any instance of this is guaranteed to hold a valid
/// email address.
///
/// Recipient addresses deliberately do not go through this type: they are
/// forwarded to the delivery provider exactly as the identity subsystem
/// reported them, and the provider is the one that rejects bad ones.
///
/// # Examples
/// Use the `parse` function to build a `SenderEmail` from a string.
/// We can then get the address back out using the `AsRef<str>` implementation.
/// ```
/// use rutau_welcome::domain::SenderEmail;
///
/// let sender = SenderEmail::parse("bienvenida@rutau.app".to_string()).unwrap();
/// assert_eq!("bienvenida@rutau.app", sender.as_ref());
/// ```
#[derive(Debug)]
pub struct SenderEmail(String);

impl SenderEmail {
    /// Return `Ok` with a valid `SenderEmail` when `s` is a valid email
    /// address. Otherwise, returns `Err` with an error message describing
    /// the problem.
    pub fn parse(s: String) -> Result<Self, String> {
        if validate_email(&s) {
            Ok(SenderEmail(s))
        } else {
            Err(format!("{} is not a valid sender email.", s))
        }
    }
}

impl AsRef<str> for SenderEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
