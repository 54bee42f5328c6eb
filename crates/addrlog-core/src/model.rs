//! Data model for the inventory pipeline
//!
//! `RawInventory` is the narrow, provider-agnostic view of a listing
//! response as handed over by an `InventorySource`. `InstanceRecord` and
//! `InventorySnapshot` are the flat projection produced from it.

use serde::{Deserialize, Serialize};

/// One instance entry as seen in the raw provider response.
///
/// All fields are optional at this stage: the upstream tree may omit any of
/// them, and empty strings stand for absent network attachments. Validation
/// happens during projection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInstance {
    /// Provider-assigned instance identifier
    pub instance_id: Option<String>,
    /// Private network address, if attached
    pub private_address: Option<String>,
    /// Public network address, if attached
    pub public_address: Option<String>,
}

/// A provider-side grouping of instances launched together.
///
/// Only the instance list matters here; any other reservation metadata is
/// dropped at the source boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawReservation {
    /// Instances belonging to this reservation, in upstream order
    pub instances: Vec<RawInstance>,
}

/// The nested reservation/instance tree returned by one listing call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInventory {
    /// Reservations in upstream order
    pub reservations: Vec<RawReservation>,
}

/// The canonical flat projection of one cloud instance.
///
/// `instance_id` is always non-empty; records with a missing identifier are
/// rejected by the projector. Zero, one, or two addresses may be populated
/// independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceRecord {
    /// Opaque, non-empty instance identifier
    pub instance_id: String,
    /// Private address, `None` if the instance has no private attachment
    pub private_address: Option<String>,
    /// Public address, `None` if the instance has no public attachment
    pub public_address: Option<String>,
}

/// An ordered sequence of `InstanceRecord`s from one listing call.
///
/// Order is upstream iteration order: reservation-major, instance-minor.
/// Duplicate instance ids are not rejected; within one snapshot the provider
/// is expected not to repeat them, but nothing here relies on that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventorySnapshot {
    records: Vec<InstanceRecord>,
}

impl InventorySnapshot {
    /// Wrap an ordered record sequence
    pub fn new(records: Vec<InstanceRecord>) -> Self {
        Self { records }
    }

    /// The records in projection order
    pub fn records(&self) -> &[InstanceRecord] {
        &self.records
    }

    /// Total instance count across all reservations
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the snapshot holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a InventorySnapshot {
    type Item = &'a InstanceRecord;
    type IntoIter = std::slice::Iter<'a, InstanceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
