// # Memory Address Sink
//
// In-memory implementation of AddressSink.
//
// Nothing survives the process; useful for tests and for embedding the
// pipeline where a durable artifact is not wanted.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::Result;
use crate::traits::AddressSink;

/// In-memory address sink
///
/// Cloning shares the underlying line buffer, so a test can keep a handle
/// while handing a clone to the engine.
#[derive(Debug, Clone, Default)]
pub struct MemoryAddressSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryAddressSink {
    /// Create a new empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the appended lines, in append order
    pub async fn lines(&self) -> Vec<String> {
        self.lines.lock().await.clone()
    }

    /// Number of appended lines
    pub async fn len(&self) -> usize {
        self.lines.lock().await.len()
    }

    /// Whether nothing has been appended yet
    pub async fn is_empty(&self) -> bool {
        self.lines.lock().await.is_empty()
    }
}

#[async_trait]
impl AddressSink for MemoryAddressSink {
    async fn append(&self, line: &str) -> Result<()> {
        self.lines.lock().await.push(line.to_string());
        Ok(())
    }
}
