//! Email sender configuration

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::domain::communication::recipients::{ConfigurationError, Recipients};

/// The port used when none is configured
pub const DEFAULT_SMTP_PORT: u16 = 25;

fn default_port() -> u16 {
    DEFAULT_SMTP_PORT
}

/// Connection details and default addresses for an [`EmailSender`](super::EmailSender)
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct EmailSenderConfig {
    /// The hostname or IP address of the SMTP server
    pub server_host: String,

    /// The port of the SMTP server
    #[serde(default = "default_port")]
    pub port: u16,

    /// The username to authenticate with
    pub user_name: String,

    /// The password to authenticate with
    pub password: String,

    /// The default sender address
    #[serde(default)]
    pub from_address: Option<String>,

    /// The default destination addresses
    #[serde(default)]
    pub destination_addresses: Option<Recipients>,
}

impl EmailSenderConfig {
    /// Create a configuration without default addresses
    pub fn new(
        server_host: impl Into<String>,
        port: u16,
        user_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            server_host: server_host.into(),
            port,
            user_name: user_name.into(),
            password: password.into(),
            from_address: None,
            destination_addresses: None,
        }
    }

    /// Set the default sender address
    pub fn with_from_address(mut self, from_address: impl Into<String>) -> Self {
        self.from_address = Some(from_address.into());
        self
    }

    /// Set the default destination addresses
    pub fn with_destination_addresses(mut self, addresses: impl Into<Recipients>) -> Self {
        self.destination_addresses = Some(addresses.into());
        self
    }

    /// Set the default destination addresses from an untyped value
    ///
    /// # Returns
    /// A [`Result`] which is an [`Err`] containing a [`ConfigurationError`] if `value` is
    /// neither a string nor an array of strings.
    pub fn try_with_destination_addresses(
        self,
        value: &Value,
    ) -> Result<Self, ConfigurationError> {
        Ok(self.with_destination_addresses(Recipients::from_value(value)?))
    }
}

impl fmt::Debug for EmailSenderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailSenderConfig")
            .field("server_host", &self.server_host)
            .field("port", &self.port)
            .field("user_name", &self.user_name)
            .field("password", &"********")
            .field("from_address", &self.from_address)
            .field("destination_addresses", &self.destination_addresses)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_builder_sets_defaults() {
        let config = EmailSenderConfig::new("mock_host", 25, "u", "p")
            .with_from_address("a@example.com")
            .with_destination_addresses(["x@example.com", "y@example.com"]);

        assert_eq!(config.from_address.as_deref(), Some("a@example.com"));
        assert_eq!(
            config.destination_addresses,
            Some(Recipients::many(["x@example.com", "y@example.com"]))
        );
    }

    #[test]
    fn test_try_with_destination_addresses() -> TestResult {
        let config = EmailSenderConfig::new("mock_host", 25, "u", "p")
            .try_with_destination_addresses(&json!(["x@example.com"]))?;

        assert_eq!(
            config.destination_addresses,
            Some(Recipients::many(["x@example.com"]))
        );

        let result = EmailSenderConfig::new("mock_host", 25, "u", "p")
            .try_with_destination_addresses(&json!(3.5));

        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidDestinationAddresses { found: "a number" })
        ));

        Ok(())
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = EmailSenderConfig::new("mock_host", 25, "u", "hunter2");

        let debug = format!("{:?}", config);

        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("mock_host"));
    }

    #[test]
    fn test_deserialize_with_single_recipient() -> TestResult {
        let config: EmailSenderConfig = serde_json::from_value(json!({
            "server_host": "mock_host",
            "user_name": "u",
            "password": "p",
            "from_address": "a@example.com",
            "destination_addresses": "z@example.com",
        }))?;

        assert_eq!(config.port, DEFAULT_SMTP_PORT);
        assert_eq!(
            config.destination_addresses,
            Some(Recipients::single("z@example.com"))
        );

        Ok(())
    }

    #[test]
    fn test_deserialize_rejects_invalid_destination_addresses() {
        let result = serde_json::from_value::<EmailSenderConfig>(json!({
            "server_host": "mock_host",
            "port": 25,
            "user_name": "u",
            "password": "p",
            "destination_addresses": { "x": 1 },
        }));

        assert!(result.is_err());
    }
}
