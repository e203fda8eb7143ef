//! Error types for sending email

use thiserror::Error;

use crate::domain::communication::mailer::TransportError;

/// Errors that can occur when sending an email
#[derive(Debug, Error)]
pub enum SendEmailError {
    /// Neither the call nor the sender's defaults supplied a from address
    #[error("no sender address was configured or supplied")]
    MissingSender,

    /// Neither the call nor the sender's defaults supplied a destination address
    #[error("no destination addresses were configured or supplied")]
    MissingRecipients,

    /// The mail transport failed
    #[error(transparent)]
    Transport(#[from] TransportError),
}
