#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Sends a test email to check that SMTP credentials work

use anyhow::Result;
use clap::Parser;
use notify_mailer::{
    domain::communication::{
        sender::DEFAULT_SMTP_PORT, EmailSender, EmailSenderConfig, Recipients,
    },
    infrastructure::email::smtp::{SmtpRelay, SmtpRelayConfig},
};
use tracing_subscriber::EnvFilter;

const TEST_EMAIL_BODY: &str = "This is the test e-mail from send-test-email. \
    If you are reading this, the software is configured correctly.";

const TEST_EMAIL_SUBJECT: &str = "Test e-mail from send-test-email";

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
#[clap(about = "Send a test e-mail to check that the SMTP settings are functional")]
pub struct Args {
    /// The e-mail address to which the test should be sent
    #[clap(long, env = "SMTP_RECIPIENTS", value_delimiter = ',', required = true)]
    pub email: Vec<String>,

    /// The hostname or IP address of the SMTP server
    #[clap(long, env = "SMTP_HOST")]
    pub server: String,

    /// The port number on which the SMTP server listens
    #[clap(long, env = "SMTP_PORT", default_value_t = DEFAULT_SMTP_PORT)]
    pub port: u16,

    /// The username to authenticate with the SMTP server
    #[clap(long, env = "SMTP_USER")]
    pub username: String,

    /// The password to authenticate with the SMTP server
    #[clap(long, env = "SMTP_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// The 'from' e-mail address
    #[clap(long = "from_address", env = "SMTP_SENDER")]
    pub from_address: String,

    /// The SMTP connection options
    #[clap(flatten)]
    pub relay: SmtpRelayConfig,
}

impl Args {
    fn sender_config(&self) -> EmailSenderConfig {
        EmailSenderConfig::new(
            self.server.as_str(),
            self.port,
            self.username.as_str(),
            self.password.as_str(),
        )
        .with_from_address(self.from_address.as_str())
        .with_destination_addresses(Recipients::many(self.email.iter().cloned()))
    }
}

#[mutants::skip]
fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let sender = EmailSender::new(args.sender_config(), SmtpRelay::new(args.relay.clone()));

    sender.send_email(TEST_EMAIL_BODY, TEST_EMAIL_SUBJECT, None, None)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_args_build_sender_config() -> TestResult {
        let args = Args::try_parse_from([
            "send-test-email",
            "--email",
            "x@example.com",
            "--email",
            "y@example.com",
            "--server",
            "mock_host",
            "--username",
            "u",
            "--password",
            "p",
            "--from_address",
            "a@example.com",
        ])?;

        assert_eq!(args.port, 25);

        let config = args.sender_config();

        assert_eq!(config.server_host, "mock_host");
        assert_eq!(config.user_name, "u");
        assert_eq!(config.password, "p");
        assert_eq!(config.from_address.as_deref(), Some("a@example.com"));
        assert_eq!(
            config.destination_addresses,
            Some(Recipients::many(["x@example.com", "y@example.com"]))
        );

        Ok(())
    }

    #[test]
    fn test_args_require_a_recipient() {
        let result = Args::try_parse_from([
            "send-test-email",
            "--server",
            "mock_host",
            "--username",
            "u",
            "--password",
            "p",
            "--from_address",
            "a@example.com",
        ]);

        assert!(result.is_err());
    }
}
