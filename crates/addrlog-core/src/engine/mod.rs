//! Inventory run engine
//!
//! The engine drives one run end to end:
//!
//! ```text
//! ┌─────────────────┐      ┌───────────┐      ┌──────────────┐
//! │ InventorySource │ ───▶ │  project  │ ───▶ │ per record:  │
//! │ (one fetch)     │      │ (flatten) │      │ select ─ append
//! └─────────────────┘      └───────────┘      └──────────────┘
//! ```
//!
//! One fetch, one linear pass. Per record, the configured `AddressKind`
//! resolves the address; records without it are skipped silently. Each
//! resolved address is appended to the sink and confirmed on stdout.
//!
//! Fetch and projection failures are always fatal. Append failures follow
//! the configured `AppendFailurePolicy`; the default halts the run on the
//! first one (lines already written stay in the artifact).

use tracing::{debug, info, warn};

use crate::config::{AppendFailurePolicy, RunConfig};
use crate::error::Result;
use crate::projector::project;
use crate::traits::{AddressSink, InventorySource};

/// Per-run counters reported after the pass completes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Instances in the snapshot
    pub instances: usize,
    /// Addresses appended to the artifact
    pub appended: usize,
    /// Records without the requested address kind
    pub skipped: usize,
    /// Failed appends (only non-zero under `AppendFailurePolicy::Continue`)
    pub failed: usize,
}

/// One-shot engine: fetch, project, select, append
pub struct InventoryEngine {
    source: Box<dyn InventorySource>,
    sink: Box<dyn AddressSink>,
    config: RunConfig,
}

impl InventoryEngine {
    /// Create an engine over a source and a sink.
    ///
    /// Validates the configuration up front so an invalid run never reaches
    /// the remote source.
    pub fn new(
        source: Box<dyn InventorySource>,
        sink: Box<dyn AddressSink>,
        config: RunConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            source,
            sink,
            config,
        })
    }

    /// Run the pipeline once.
    ///
    /// # Returns
    ///
    /// - `Ok(RunSummary)`: the pass completed (possibly with counted
    ///   failures under the `Continue` policy)
    /// - `Err(Error)`: fatal condition; the run halted at that point
    pub async fn run(&self) -> Result<RunSummary> {
        debug!(
            source = self.source.source_name(),
            kind = %self.config.address_kind,
            "listing instances"
        );
        let raw = self.source.describe_instances().await?;
        let snapshot = project(&raw)?;

        let mut summary = RunSummary {
            instances: snapshot.len(),
            ..RunSummary::default()
        };

        for record in &snapshot {
            let Some(address) = self.config.address_kind.select(record) else {
                debug!(
                    instance_id = %record.instance_id,
                    kind = %self.config.address_kind,
                    "no address of requested kind, skipping"
                );
                summary.skipped += 1;
                continue;
            };

            match self.sink.append(address).await {
                Ok(()) => {
                    // Operator-facing confirmation block, one per record.
                    println!("Instance: {}\nIP: {}", record.instance_id, address);
                    summary.appended += 1;
                }
                Err(e) => match self.config.append_failure {
                    AppendFailurePolicy::FailFast => return Err(e),
                    AppendFailurePolicy::Continue => {
                        warn!(instance_id = %record.instance_id, error = %e, "append failed, continuing");
                        summary.failed += 1;
                    }
                },
            }
        }

        info!(
            instances = summary.instances,
            appended = summary.appended,
            skipped = summary.skipped,
            failed = summary.failed,
            "run complete"
        );
        Ok(summary)
    }
}
