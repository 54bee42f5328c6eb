//! Test doubles and common utilities for pipeline contract tests

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use addrlog_core::error::{Error, Result};
use addrlog_core::model::{RawInstance, RawInventory, RawReservation};
use addrlog_core::traits::{AddressSink, InventorySource};
use addrlog_core::{AppendFailurePolicy, RunConfig};

/// Build a raw instance entry from plain strings; empty strings model
/// missing network attachments exactly as the provider sends them
pub fn raw_instance(id: &str, private: &str, public: &str) -> RawInstance {
    RawInstance {
        instance_id: if id.is_empty() { None } else { Some(id.to_string()) },
        private_address: Some(private.to_string()),
        public_address: Some(public.to_string()),
    }
}

/// One reservation holding the given instances
pub fn reservation(instances: Vec<RawInstance>) -> RawReservation {
    RawReservation { instances }
}

/// The two-instance inventory used by the end-to-end scenarios:
/// i-1 has both addresses, i-2 has no public address
pub fn scenario_inventory() -> RawInventory {
    RawInventory {
        reservations: vec![reservation(vec![
            raw_instance("i-1", "10.0.0.1", "3.3.3.3"),
            raw_instance("i-2", "10.0.0.2", ""),
        ])],
    }
}

/// An InventorySource that returns a fixed tree and counts calls
pub struct StaticInventorySource {
    inventory: RawInventory,
    call_count: Arc<AtomicUsize>,
}

impl StaticInventorySource {
    pub fn new(inventory: RawInventory) -> Self {
        Self {
            inventory,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Handle to the call counter, usable after the source is boxed
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.call_count)
    }
}

#[async_trait::async_trait]
impl InventorySource for StaticInventorySource {
    async fn describe_instances(&self) -> Result<RawInventory> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.inventory.clone())
    }

    fn source_name(&self) -> &'static str {
        "static"
    }
}

/// An InventorySource whose listing call always fails
pub struct FailingInventorySource;

#[async_trait::async_trait]
impl InventorySource for FailingInventorySource {
    async fn describe_instances(&self) -> Result<RawInventory> {
        Err(Error::fetch("listing call refused"))
    }

    fn source_name(&self) -> &'static str {
        "failing"
    }
}

/// A sink that records successful appends but fails on chosen call indices
pub struct FlakySink {
    lines: Arc<tokio::sync::Mutex<Vec<String>>>,
    fail_on: Vec<usize>,
    calls: Arc<AtomicUsize>,
}

impl FlakySink {
    /// `fail_on` lists zero-based append call indices that must fail
    pub fn new(fail_on: Vec<usize>) -> Self {
        Self {
            lines: Arc::new(tokio::sync::Mutex::new(Vec::new())),
            fail_on,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn sharing_lines_with(other: &Self) -> Self {
        Self {
            lines: Arc::clone(&other.lines),
            fail_on: other.fail_on.clone(),
            calls: Arc::clone(&other.calls),
        }
    }

    pub async fn lines(&self) -> Vec<String> {
        self.lines.lock().await.clone()
    }

    pub fn append_call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl AddressSink for FlakySink {
    async fn append(&self, line: &str) -> Result<()> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_on.contains(&call) {
            return Err(Error::sink(format!("injected failure on append {call}")));
        }
        self.lines.lock().await.push(line.to_string());
        Ok(())
    }
}

/// Helper to create a RunConfig for a given kind and policy
pub fn test_config(kind: &str, policy: AppendFailurePolicy) -> RunConfig {
    RunConfig {
        address_kind: kind.parse().expect("test kind parses"),
        append_failure: policy,
        ..RunConfig::default()
    }
}
