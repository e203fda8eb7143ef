//! Destination addresses

use std::fmt;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// An error that can occur when building a set of destination addresses
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The value was neither a string nor a collection of strings
    #[error("destination addresses must be a string or a collection of strings, found {found}")]
    InvalidDestinationAddresses {
        /// The kind of value that was supplied instead
        found: &'static str,
    },
}

/// The destination addresses of an email.
///
/// A [`Recipients::Single`] is always exactly one address, it is never
/// split into characters.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub enum Recipients {
    /// A single address
    Single(String),

    /// An ordered collection of addresses
    Many(Vec<String>),
}

impl Recipients {
    /// Create a single recipient
    pub fn single(address: impl Into<String>) -> Self {
        Self::Single(address.into())
    }

    /// Create a set of recipients, keeping the iteration order of `addresses`
    pub fn many<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Many(addresses.into_iter().map(Into::into).collect())
    }

    /// Build recipients from an untyped value.
    ///
    /// # Returns
    /// - [`Ok`] with [`Recipients::Single`] for a string.
    /// - [`Ok`] with [`Recipients::Many`] for an array of strings.
    /// - [`Err`] containing a [`ConfigurationError`] for anything else.
    pub fn from_value(value: &Value) -> Result<Self, ConfigurationError> {
        match value {
            Value::String(address) => Ok(Self::Single(address.clone())),
            Value::Array(values) => values
                .iter()
                .map(|value| match value {
                    Value::String(address) => Ok(address.clone()),
                    other => Err(ConfigurationError::InvalidDestinationAddresses {
                        found: kind_of(other),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Many),
            other => Err(ConfigurationError::InvalidDestinationAddresses {
                found: kind_of(other),
            }),
        }
    }

    /// Whether there is no address to send to
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(address) => address.is_empty(),
            Self::Many(addresses) => addresses.is_empty(),
        }
    }

    /// The number of addresses
    pub fn len(&self) -> usize {
        match self {
            Self::Single(address) if address.is_empty() => 0,
            Self::Single(_) => 1,
            Self::Many(addresses) => addresses.len(),
        }
    }

    /// Iterate over the addresses in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let addresses = match self {
            Self::Single(address) if address.is_empty() => &[][..],
            Self::Single(address) => std::slice::from_ref(address),
            Self::Many(addresses) => addresses.as_slice(),
        };

        addresses.iter().map(String::as_str)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array with a non-string element",
        Value::Object(_) => "an object",
    }
}

impl TryFrom<Value> for Recipients {
    type Error = ConfigurationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

impl From<&str> for Recipients {
    fn from(address: &str) -> Self {
        Self::single(address)
    }
}

impl From<String> for Recipients {
    fn from(address: String) -> Self {
        Self::Single(address)
    }
}

impl From<Vec<String>> for Recipients {
    fn from(addresses: Vec<String>) -> Self {
        Self::Many(addresses)
    }
}

impl From<Vec<&str>> for Recipients {
    fn from(addresses: Vec<&str>) -> Self {
        Self::many(addresses)
    }
}

impl<const N: usize> From<[&str; N]> for Recipients {
    fn from(addresses: [&str; N]) -> Self {
        Self::many(addresses)
    }
}

impl FromIterator<String> for Recipients {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::many(iter)
    }
}

impl fmt::Display for Recipients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iter().collect::<Vec<_>>().join(", "))
    }
}
