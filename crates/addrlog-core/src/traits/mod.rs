//! Trait seams of the pipeline
//!
//! The engine only ever talks to an `InventorySource` and an `AddressSink`;
//! concrete implementations (the EC2 source, the file sink) live behind
//! these traits so the pipeline can be exercised entirely in memory.

pub mod address_sink;
pub mod inventory_source;

pub use address_sink::AddressSink;
pub use inventory_source::InventorySource;
