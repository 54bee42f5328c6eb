//! Error types for the addrlog pipeline
//!
//! Every variant is fatal for the run it occurs in; the one expected
//! non-error outcome (a record without the requested address) is expressed
//! as `Option::None` by the selector, not as an error.

use thiserror::Error;

/// Result type alias for addrlog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the addrlog pipeline
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid or unsupported run configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Credential/profile/region resolution failure, before any fetch
    #[error("resolution error: {0}")]
    Resolution(String),

    /// The remote listing call failed
    #[error("fetch error: {0}")]
    Fetch(String),

    /// The raw inventory tree could not be projected into flat records
    #[error("projection error: {0}")]
    Projection(String),

    /// The log artifact could not be opened or written
    #[error("log sink error: {0}")]
    Sink(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a resolution error
    pub fn resolution(msg: impl Into<String>) -> Self {
        Self::Resolution(msg.into())
    }

    /// Create a fetch error
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Create a projection error
    pub fn projection(msg: impl Into<String>) -> Self {
        Self::Projection(msg.into())
    }

    /// Create a log sink error
    pub fn sink(msg: impl Into<String>) -> Self {
        Self::Sink(msg.into())
    }
}
