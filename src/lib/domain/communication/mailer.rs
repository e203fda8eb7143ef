//! Mail transport capability

mod errors;
mod message;

pub use errors::TransportError;
pub use message::OutboundMessage;

#[cfg(test)]
use mockall::mock;

/// Opens sessions with a mail server
pub trait Transport: Send + Sync {
    /// The session type handed out by [`Transport::open_session`]
    type Session: Session;

    /// Open a session with the server at `host:port`
    ///
    /// # Returns
    /// A [`Result`] containing the open, not yet authenticated, session.
    fn open_session(&self, host: &str, port: u16) -> Result<Self::Session, TransportError>;
}

/// A connection to a mail server able to deliver one or more messages
pub trait Session {
    /// Log in to the server
    fn authenticate(&mut self, user_name: &str, password: &str) -> Result<(), TransportError>;

    /// Deliver a single message
    fn deliver(&mut self, message: &OutboundMessage) -> Result<(), TransportError>;

    /// End the session
    fn close(&mut self) -> Result<(), TransportError>;
}

#[cfg(test)]
mock! {
    pub Session {}

    impl Session for Session {
        fn authenticate(&mut self, user_name: &str, password: &str) -> Result<(), TransportError>;
        fn deliver(&mut self, message: &OutboundMessage) -> Result<(), TransportError>;
        fn close(&mut self) -> Result<(), TransportError>;
    }
}

#[cfg(test)]
mock! {
    pub Transport {}

    impl Transport for Transport {
        type Session = MockSession;

        fn open_session(&self, host: &str, port: u16) -> Result<MockSession, TransportError>;
    }
}

#[cfg(test)]
pub mod tests {
    pub use super::{MockSession, MockTransport};
}
