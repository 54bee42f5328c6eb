//! Address sink implementations

pub mod file;
pub mod memory;

pub use file::FileAddressSink;
pub use memory::MemoryAddressSink;
