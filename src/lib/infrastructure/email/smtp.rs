//! SMTP transport implementation

use std::{fmt, time::Duration};

use clap::Parser;
use lettre::{
    message::header::ContentType,
    transport::smtp::{
        authentication::{Credentials, Mechanism},
        client::{SmtpConnection, TlsParameters},
        extension::ClientId,
    },
    Message,
};
use tracing::debug;

use crate::domain::communication::mailer::{OutboundMessage, Session, Transport, TransportError};

/// The seconds to wait on the SMTP server when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// SMTP connection options
#[derive(Clone, Debug, PartialEq, Eq, Parser)]
pub struct SmtpRelayConfig {
    /// Seconds to wait on the SMTP server before giving up
    #[clap(long, env = "SMTP_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Upgrade the connection with STARTTLS before logging in
    #[clap(long, env = "SMTP_STARTTLS")]
    pub starttls: bool,

    /// Verify the TLS certificate
    #[clap(
        long,
        env = "SMTP_VERIFY_TLS",
        default_value = "true",
        action = clap::ArgAction::Set
    )]
    pub verify_tls: bool,
}

impl Default for SmtpRelayConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT_SECS,
            starttls: false,
            verify_tls: true,
        }
    }
}

/// Opens SMTP sessions with lettre
#[derive(Debug, Default, Clone)]
pub struct SmtpRelay {
    config: SmtpRelayConfig,
}

impl SmtpRelay {
    /// Create a new SMTP relay
    pub fn new(config: SmtpRelayConfig) -> Self {
        Self { config }
    }

    fn tls_parameters(&self, host: &str) -> Result<TlsParameters, TransportError> {
        Ok(TlsParameters::builder(host.to_string())
            .dangerous_accept_invalid_certs(!self.config.verify_tls)
            .build()?)
    }
}

impl Transport for SmtpRelay {
    type Session = SmtpSession;

    fn open_session(&self, host: &str, port: u16) -> Result<SmtpSession, TransportError> {
        let hello_name = ClientId::default();
        let timeout = Some(Duration::from_secs(self.config.timeout));

        let mut connection = SmtpConnection::connect((host, port), timeout, &hello_name, None, None)?;

        if self.config.starttls {
            debug!("upgrading connection with {}:{} to TLS", host, port);

            let upgraded = self
                .tls_parameters(host)
                .and_then(|tls| Ok(connection.starttls(&tls, &hello_name)?));

            if let Err(e) = upgraded {
                connection.abort();
                return Err(e);
            }
        }

        Ok(SmtpSession { connection })
    }
}

/// An open SMTP connection
pub struct SmtpSession {
    connection: SmtpConnection,
}

impl fmt::Debug for SmtpSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpSession")
            .field("encrypted", &self.connection.is_encrypted())
            .finish_non_exhaustive()
    }
}

impl Session for SmtpSession {
    fn authenticate(&mut self, user_name: &str, password: &str) -> Result<(), TransportError> {
        let credentials = Credentials::new(user_name.to_string(), password.to_string());

        self.connection
            .auth(&[Mechanism::Plain, Mechanism::Login], &credentials)?;

        Ok(())
    }

    fn deliver(&mut self, message: &OutboundMessage) -> Result<(), TransportError> {
        let email = build_message(message)?;

        self.connection
            .send(email.envelope(), &email.formatted())?;

        Ok(())
    }

    fn close(&mut self) -> Result<(), TransportError> {
        self.connection.quit()?;

        Ok(())
    }
}

fn build_message(message: &OutboundMessage) -> Result<Message, TransportError> {
    Ok(Message::builder()
        .from(message.from_address.parse()?)
        .to(message.to_address.parse()?)
        .subject(message.subject.clone())
        .header(ContentType::TEXT_PLAIN)
        .body(message.body.clone())?)
}
