//! Sending notification emails

pub mod errors;
pub mod mailer;
pub mod recipients;
pub mod sender;

pub use errors::SendEmailError;
pub use recipients::{ConfigurationError, Recipients};
pub use sender::{EmailSender, EmailSenderConfig};
