// # EC2 Inventory Source
//
// AWS EC2 implementation of the addrlog `InventorySource` trait.
//
// ## Behavior
//
// - One unpaginated `DescribeInstances` call per invocation; continuation
//   tokens are ignored on purpose (the tool snapshots a single page)
// - No filtering: every instance visible to the resolved credentials in the
//   configured region is reported
// - The SDK response is mapped field by field into the narrow `RawInventory`
//   shape; nothing else from the reservation tree is carried over
//
// ## Credential Resolution
//
// `connect()` resolves the shared AWS config for an explicit profile and a
// static region. Credential problems that only surface at call time (the
// shared-config load itself is infallible) are reported as fetch errors by
// `describe_instances`.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_ec2::Client;

use addrlog_core::error::{Error, Result};
use addrlog_core::model::{RawInstance, RawInventory, RawReservation};
use addrlog_core::traits::InventorySource;

/// EC2-backed inventory source
#[derive(Debug, Clone)]
pub struct Ec2InventorySource {
    client: Client,
}

impl Ec2InventorySource {
    /// Resolve the shared AWS config for `profile`/`region` and build a
    /// client.
    ///
    /// # Errors
    ///
    /// Returns `Error::Resolution` when profile or region is empty; those
    /// must come from the validated run configuration.
    pub async fn connect(profile: &str, region: &str) -> Result<Self> {
        if profile.is_empty() {
            return Err(Error::resolution("profile cannot be empty"));
        }
        if region.is_empty() {
            return Err(Error::resolution("region cannot be empty"));
        }

        let config = aws_config::defaults(BehaviorVersion::latest())
            .profile_name(profile)
            .region(Region::new(region.to_string()))
            .load()
            .await;

        tracing::debug!(profile, region, "resolved AWS shared config");
        Ok(Self {
            client: Client::new(&config),
        })
    }

    /// Wrap an already-built EC2 client (e.g. one with custom endpoints)
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl InventorySource for Ec2InventorySource {
    async fn describe_instances(&self) -> Result<RawInventory> {
        let resp = self
            .client
            .describe_instances()
            .send()
            .await
            .map_err(|e| Error::fetch(format!("DescribeInstances failed: {e}")))?;

        let reservations = resp
            .reservations()
            .iter()
            .map(|res| RawReservation {
                instances: res
                    .instances()
                    .iter()
                    .map(|inst| RawInstance {
                        instance_id: inst.instance_id().map(str::to_string),
                        private_address: inst.private_ip_address().map(str::to_string),
                        public_address: inst.public_ip_address().map(str::to_string),
                    })
                    .collect(),
            })
            .collect();

        Ok(RawInventory { reservations })
    }

    fn source_name(&self) -> &'static str {
        "ec2"
    }
}
