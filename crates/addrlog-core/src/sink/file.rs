// # File Address Sink
//
// File-based implementation of AddressSink.
//
// ## Artifact Lifecycle
//
// - Created on first write if absent
// - Each run appends; the file is never truncated, rotated, or deduplicated
// - Shared across runs; no locking is provided. Concurrent runs may
//   interleave at line granularity, relying on the platform's append-mode
//   atomicity per write call
//
// ## Handle Scope
//
// The handle is acquired per append and released on every exit path when it
// drops at the end of the call. `open()` probes the artifact once up front
// so an unopenable path halts the run before any fetch output is processed.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::error::{Error, Result};
use crate::traits::AddressSink;

/// Append-only file sink for selected addresses
#[derive(Debug, Clone)]
pub struct FileAddressSink {
    path: PathBuf,
}

impl FileAddressSink {
    /// Open (creating if absent) the artifact at `path`.
    ///
    /// The probe open is the fatal gate of the run: if the artifact cannot
    /// be opened, no inventory processing should happen at all.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        Self::open_handle(&path).await?;
        Ok(Self { path })
    }

    /// Path of the underlying artifact
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn open_handle(path: &Path) -> Result<tokio::fs::File> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .read(true)
            .open(path)
            .await
            .map_err(|e| {
                Error::sink(format!("failed to open log file {}: {}", path.display(), e))
            })
    }
}

#[async_trait]
impl AddressSink for FileAddressSink {
    async fn append(&self, line: &str) -> Result<()> {
        let mut file = Self::open_handle(&self.path).await?;

        // One write call per line so cross-run interleaving stays
        // line-granular.
        let buf = format!("{line}\n");
        file.write_all(buf.as_bytes()).await.map_err(|e| {
            Error::sink(format!(
                "failed to append to log file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        file.flush().await.map_err(|e| {
            Error::sink(format!(
                "failed to flush log file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        tracing::trace!(path = %self.path.display(), line, "appended address line");
        Ok(())
    }
}
