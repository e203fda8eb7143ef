//! Adapters for the domain's external capabilities

pub mod email;
