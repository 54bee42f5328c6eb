// # Address Sink Trait
//
// Defines the interface for the append-only log artifact.
//
// ## Purpose
//
// The log artifact is process-external shared state: it accumulates one
// address line per persisted record, across runs, and is never truncated or
// deduplicated by this system. Modeling it as an injected capability keeps
// the engine off the filesystem and lets tests swap in an in-memory sink.
//
// ## Implementations
//
// - `FileAddressSink`: append-only file, create-if-absent
// - `MemoryAddressSink`: `Vec<String>` behind a lock, for tests

use async_trait::async_trait;

use crate::error::Result;

/// Trait for append-only address sinks
///
/// Implementations must be safe to call from async context and must append
/// each line with a single underlying write so that concurrent runs can only
/// interleave at line granularity.
#[async_trait]
pub trait AddressSink: Send + Sync {
    /// Durably append one address line to the artifact.
    ///
    /// The implementation owns the line terminator; callers pass the bare
    /// address string.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: the line was written
    /// - `Err(Error::Sink)`: the write failed; the engine's failure policy
    ///   decides whether the run continues
    async fn append(&self, line: &str) -> Result<()>;
}
