// # addrlog-core
//
// Core library for the addrlog inventory snapshot tool.
//
// ## Architecture Overview
//
// addrlog takes one listing of the compute instances visible to a cloud
// account/region and appends one chosen address per instance to a shared
// append-only log file:
//
// - **InventorySource**: Trait for fetching the raw reservation/instance tree
// - **project**: Flattens the raw tree into ordered `InstanceRecord`s
// - **AddressKind**: Selects the private or public address of a record
// - **AddressSink**: Trait for durably appending one address line
// - **InventoryEngine**: Drives fetch → project → select → append
//
// ## Design Principles
//
// 1. **Separation of Concerns**: The pipeline never touches the network or
//    the filesystem directly; both sit behind traits.
// 2. **Single Pass**: One fetch, one linear walk over the snapshot. No
//    retries, no pagination, no concurrency within a run.
// 3. **Library-First**: The binary crate is a thin shell over this library.

pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod projector;
pub mod selector;
pub mod sink;
pub mod traits;

// Re-export core types for convenience
pub use config::{AppendFailurePolicy, RunConfig};
pub use engine::{InventoryEngine, RunSummary};
pub use error::{Error, Result};
pub use model::{InstanceRecord, InventorySnapshot, RawInstance, RawInventory, RawReservation};
pub use projector::project;
pub use selector::AddressKind;
pub use sink::{FileAddressSink, MemoryAddressSink};
pub use traits::{AddressSink, InventorySource};
