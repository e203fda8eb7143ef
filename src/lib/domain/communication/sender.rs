//! Email sender module.

mod config;
mod service;

pub use config::{EmailSenderConfig, DEFAULT_SMTP_PORT};
pub use service::EmailSender;
