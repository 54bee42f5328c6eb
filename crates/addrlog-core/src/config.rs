//! Run configuration
//!
//! One `RunConfig` describes one invocation: which profile/region to resolve
//! the inventory source against, which address field to persist, where the
//! log artifact lives, and how to react when a single append fails.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::selector::AddressKind;

/// Default AWS shared config profile
pub const DEFAULT_PROFILE: &str = "default";

/// Default AWS region
pub const DEFAULT_REGION: &str = "us-east-1";

/// Default log artifact path, relative to the working directory
pub const DEFAULT_LOG_PATH: &str = "generatedLogs";

/// What to do when appending a single record's address fails.
///
/// The artifact itself being unopenable is always fatal; this policy only
/// governs write failures after the sink was constructed successfully.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppendFailurePolicy {
    /// Halt the run on the first failed append. Lines already written stay
    /// in the artifact.
    #[default]
    FailFast,
    /// Log a warning, count the failure, and keep processing the remaining
    /// records.
    Continue,
}

/// Configuration for one inventory run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Credential profile to resolve
    pub profile: String,

    /// Region to list instances in
    pub region: String,

    /// Which address field to persist per instance
    #[serde(default)]
    pub address_kind: AddressKind,

    /// Path of the append-only log artifact
    pub log_path: PathBuf,

    /// Per-record append failure handling
    #[serde(default)]
    pub append_failure: AppendFailurePolicy,
}

impl RunConfig {
    /// Create a configuration with the stock defaults
    pub fn new() -> Self {
        Self {
            profile: DEFAULT_PROFILE.to_string(),
            region: DEFAULT_REGION.to_string(),
            address_kind: AddressKind::default(),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            append_failure: AppendFailurePolicy::default(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.profile.is_empty() {
            return Err(Error::config("profile cannot be empty"));
        }
        if self.region.is_empty() {
            return Err(Error::config("region cannot be empty"));
        }
        if self.log_path.as_os_str().is_empty() {
            return Err(Error::config("log path cannot be empty"));
        }
        Ok(())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new()
    }
}
