//! Email message

/// A plain text message addressed to a single recipient
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundMessage {
    /// The plain text body of the email
    pub body: String,

    /// The subject of the email
    pub subject: String,

    /// The sender of the email
    pub from_address: String,

    /// The recipient of the email
    pub to_address: String,
}

impl OutboundMessage {
    /// Create a new message
    pub fn new(body: &str, subject: &str, from_address: &str, to_address: &str) -> Self {
        Self {
            body: body.to_string(),
            subject: subject.to_string(),
            from_address: from_address.to_string(),
            to_address: to_address.to_string(),
        }
    }
}
