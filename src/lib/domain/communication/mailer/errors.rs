//! Transport errors

use thiserror::Error;

/// Errors reported by a mail transport while opening a session,
/// authenticating or delivering a message
#[derive(Debug, Error)]
pub enum TransportError {
    /// The SMTP exchange failed
    #[error(transparent)]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// An address could not be used as a mailbox
    #[error("invalid email address: {0}")]
    InvalidAddress(#[from] lettre::address::AddressError),

    /// The message could not be built
    #[error(transparent)]
    Message(#[from] lettre::error::Error),

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}
