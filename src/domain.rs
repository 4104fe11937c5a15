mod account_created;
mod sender_email;
mod welcome_email;

pub use account_created::AccountCreatedEvent;
pub use sender_email::SenderEmail;
pub use welcome_email::{WelcomeEmail, WELCOME_SUBJECT};
