//! Address selector
//!
//! `AddressKind` is the closed two-variant discriminator deciding which
//! address field of a record gets persisted. Invalid kinds are
//! unrepresentable in the type; the only place a string is accepted is the
//! case-insensitive `FromStr` impl at the configuration boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::model::InstanceRecord;

/// Which address field of a record to persist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressKind {
    /// The instance's private network address
    Private,
    /// The instance's public network address
    #[default]
    Public,
}

impl AddressKind {
    /// Resolve the address to persist for `record`.
    ///
    /// Returns `None` when the relevant field is unset. That is an expected,
    /// non-exceptional outcome (e.g. an instance with no public address when
    /// public was requested); callers skip persistence without treating it
    /// as a failure.
    pub fn select<'a>(&self, record: &'a InstanceRecord) -> Option<&'a str> {
        match self {
            AddressKind::Private => record.private_address.as_deref(),
            AddressKind::Public => record.public_address.as_deref(),
        }
    }
}

impl FromStr for AddressKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "private" => Ok(AddressKind::Private),
            "public" => Ok(AddressKind::Public),
            other => Err(Error::config(format!(
                "unsupported address kind '{other}': expected 'private' or 'public'"
            ))),
        }
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressKind::Private => write!(f, "private"),
            AddressKind::Public => write!(f, "public"),
        }
    }
}
