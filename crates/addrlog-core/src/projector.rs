//! Instance projector
//!
//! Flattens the nested reservation/instance tree into an ordered
//! `InventorySnapshot`. Pure structural projection: no filtering, no
//! deduplication, no sorting. A record with a missing or empty identifier is
//! malformed input and aborts the whole projection, since no partial result
//! is trustworthy.

use crate::error::{Error, Result};
use crate::model::{InstanceRecord, InventorySnapshot, RawInventory};

/// Project the raw tree into a flat ordered snapshot.
///
/// Outer loop over reservations, inner loop over instances, each instance
/// emitted exactly once in upstream order. Empty address strings normalize
/// to `None`. Idempotent: the same input always yields the same snapshot.
pub fn project(raw: &RawInventory) -> Result<InventorySnapshot> {
    let mut records = Vec::new();

    for (res_idx, reservation) in raw.reservations.iter().enumerate() {
        for (inst_idx, instance) in reservation.instances.iter().enumerate() {
            let instance_id = match normalize(instance.instance_id.as_deref()) {
                Some(id) => id,
                None => {
                    return Err(Error::projection(format!(
                        "instance without identifier at reservation {res_idx}, entry {inst_idx}"
                    )));
                }
            };

            records.push(InstanceRecord {
                instance_id,
                private_address: normalize(instance.private_address.as_deref()),
                public_address: normalize(instance.public_address.as_deref()),
            });
        }
    }

    Ok(InventorySnapshot::new(records))
}

/// Treat absent and empty upstream strings the same way
fn normalize(value: Option<&str>) -> Option<String> {
    match value {
        Some(s) if !s.is_empty() => Some(s.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RawInstance, RawReservation};

    fn instance(id: &str, private: &str, public: &str) -> RawInstance {
        RawInstance {
            instance_id: Some(id.to_string()),
            private_address: Some(private.to_string()),
            public_address: Some(public.to_string()),
        }
    }

    #[test]
    fn flattens_in_reservation_major_order() {
        let raw = RawInventory {
            reservations: vec![
                RawReservation {
                    instances: vec![
                        instance("i-1", "10.0.0.1", "3.3.3.3"),
                        instance("i-2", "10.0.0.2", ""),
                    ],
                },
                RawReservation {
                    instances: vec![instance("i-3", "10.0.0.3", "4.4.4.4")],
                },
            ],
        };

        let snapshot = project(&raw).unwrap();
        assert_eq!(snapshot.len(), 3);

        let ids: Vec<&str> = snapshot
            .records()
            .iter()
            .map(|r| r.instance_id.as_str())
            .collect();
        assert_eq!(ids, vec!["i-1", "i-2", "i-3"]);
    }

    #[test]
    fn empty_strings_normalize_to_none() {
        let raw = RawInventory {
            reservations: vec![RawReservation {
                instances: vec![instance("i-1", "", "")],
            }],
        };

        let snapshot = project(&raw).unwrap();
        let record = &snapshot.records()[0];
        assert_eq!(record.private_address, None);
        assert_eq!(record.public_address, None);
    }

    #[test]
    fn missing_identifier_is_rejected() {
        let raw = RawInventory {
            reservations: vec![RawReservation {
                instances: vec![RawInstance {
                    instance_id: None,
                    private_address: Some("10.0.0.1".to_string()),
                    public_address: None,
                }],
            }],
        };

        let err = project(&raw).unwrap_err();
        assert!(matches!(err, Error::Projection(_)));
    }

    #[test]
    fn empty_identifier_is_rejected() {
        let raw = RawInventory {
            reservations: vec![RawReservation {
                instances: vec![instance("", "10.0.0.1", "3.3.3.3")],
            }],
        };

        assert!(matches!(project(&raw), Err(Error::Projection(_))));
    }

    #[test]
    fn duplicate_ids_within_a_snapshot_are_kept() {
        let raw = RawInventory {
            reservations: vec![
                RawReservation {
                    instances: vec![instance("i-1", "10.0.0.1", "")],
                },
                RawReservation {
                    instances: vec![instance("i-1", "10.0.0.2", "")],
                },
            ],
        };

        let snapshot = project(&raw).unwrap();
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn projection_is_idempotent() {
        let raw = RawInventory {
            reservations: vec![RawReservation {
                instances: vec![
                    instance("i-1", "10.0.0.1", "3.3.3.3"),
                    instance("i-2", "", "4.4.4.4"),
                ],
            }],
        };

        let first = project(&raw).unwrap();
        let second = project(&raw).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_inventory_yields_empty_snapshot() {
        let snapshot = project(&RawInventory::default()).unwrap();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.len(), 0);
    }
}
