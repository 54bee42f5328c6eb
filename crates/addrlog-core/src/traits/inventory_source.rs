// # Inventory Source Trait
//
// Defines the interface for the remote listing boundary.
//
// ## Implementations
//
// - AWS EC2: `addrlog-source-ec2` crate
// - Test doubles: `tests/common/mod.rs`
//
// An inventory source performs exactly one authenticated listing call per
// invocation and hands back the provider's reservation/instance tree in the
// narrow `RawInventory` shape. It makes no decisions: no filtering, no
// retries, no pagination. Mapping from the provider's native response type
// must be an explicit field-by-field projection, never a generic
// re-serialization round trip.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::RawInventory;

/// Trait for remote inventory source implementations
#[async_trait]
pub trait InventorySource: Send + Sync {
    /// Perform one listing call and return the raw reservation tree.
    ///
    /// # Returns
    ///
    /// - `Ok(RawInventory)`: the full (single-page) listing
    /// - `Err(Error::Fetch)`: the remote call failed; fatal for the run
    async fn describe_instances(&self) -> Result<RawInventory>;

    /// Short source name for logging (e.g. "ec2")
    fn source_name(&self) -> &'static str;
}
