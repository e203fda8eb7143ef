//! Email sender service

use std::ops::{Deref, DerefMut};

use tracing::{debug, info, warn};

use crate::domain::communication::{
    errors::SendEmailError,
    mailer::{OutboundMessage, Session, Transport, TransportError},
    recipients::Recipients,
};

use super::EmailSenderConfig;

/// Sends the same email to one or more recipients over a single
/// authenticated session per call
#[derive(Debug, Clone)]
pub struct EmailSender<T>
where
    T: Transport,
{
    config: EmailSenderConfig,
    transport: T,
}

impl<T> EmailSender<T>
where
    T: Transport,
{
    /// Creates a new email sender. No connection is made until
    /// [`EmailSender::send_email`] is called.
    pub fn new(config: EmailSenderConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// The configuration this sender was created with
    pub fn config(&self) -> &EmailSenderConfig {
        &self.config
    }

    /// Sends `email_body` with `email_subject` to every destination address.
    ///
    /// # Arguments
    /// * `email_body` - The plain text body of the email.
    /// * `email_subject` - The subject of the email.
    /// * `from_email_address` - Replaces the default sender for this call when non-empty.
    /// * `destination_email_addresses` - Replaces the default recipients for this call when
    ///   non-empty. The two are never merged.
    ///
    /// # Returns
    /// - [`Ok`] once one message has been delivered per recipient.
    /// - [`Err`] containing a [`SendEmailError`] otherwise. A delivery failure stops the
    ///   remaining deliveries of the call; the session is closed either way.
    pub fn send_email(
        &self,
        email_body: &str,
        email_subject: &str,
        from_email_address: Option<&str>,
        destination_email_addresses: Option<&Recipients>,
    ) -> Result<(), SendEmailError> {
        let recipients = self.resolve_recipients(destination_email_addresses)?;
        let from_address = self.resolve_sender(from_email_address)?;

        debug!(
            "opening session with {}:{}",
            self.config.server_host, self.config.port
        );

        let mut session = SessionGuard::new(
            self.transport
                .open_session(&self.config.server_host, self.config.port)?,
        );

        session.authenticate(&self.config.user_name, &self.config.password)?;

        for to_address in recipients.iter() {
            debug!("delivering message from {} to {}", from_address, to_address);

            let message = OutboundMessage::new(email_body, email_subject, from_address, to_address);

            session.deliver(&message)?;
        }

        session.close()?;

        info!(
            "sent \"{}\" to {} recipient(s)",
            email_subject,
            recipients.len()
        );

        Ok(())
    }

    fn resolve_sender<'a>(
        &'a self,
        from_email_address: Option<&'a str>,
    ) -> Result<&'a str, SendEmailError> {
        from_email_address
            .filter(|address| !address.is_empty())
            .or(self.config.from_address.as_deref())
            .filter(|address| !address.is_empty())
            .ok_or(SendEmailError::MissingSender)
    }

    fn resolve_recipients<'a>(
        &'a self,
        destination_email_addresses: Option<&'a Recipients>,
    ) -> Result<&'a Recipients, SendEmailError> {
        destination_email_addresses
            .filter(|recipients| !recipients.is_empty())
            .or(self.config.destination_addresses.as_ref())
            .filter(|recipients| !recipients.is_empty())
            .ok_or(SendEmailError::MissingRecipients)
    }
}

/// Closes the wrapped session when dropped unless it was closed explicitly
struct SessionGuard<S>
where
    S: Session,
{
    session: S,
    closed: bool,
}

impl<S> SessionGuard<S>
where
    S: Session,
{
    fn new(session: S) -> Self {
        Self {
            session,
            closed: false,
        }
    }

    fn close(mut self) -> Result<(), TransportError> {
        self.closed = true;
        self.session.close()
    }
}

impl<S> Deref for SessionGuard<S>
where
    S: Session,
{
    type Target = S;

    fn deref(&self) -> &S {
        &self.session
    }
}

impl<S> DerefMut for SessionGuard<S>
where
    S: Session,
{
    fn deref_mut(&mut self) -> &mut S {
        &mut self.session
    }
}

impl<S> Drop for SessionGuard<S>
where
    S: Session,
{
    fn drop(&mut self) {
        if self.closed {
            return;
        }

        if let Err(e) = self.session.close() {
            warn!("could not close session: {}", e);
        }
    }
}
