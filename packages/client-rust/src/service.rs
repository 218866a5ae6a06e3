use async_trait::async_trait;
use bytes::Bytes;

use crate::types::{KeyRange, KeyValue, RegionId, TableId};

/// Transport-level handle for issuing remote calls against one region of one
/// table. Implementations: gRPC transport (production), memory (tests).
///
/// One method per supported verb. Each owns connection lifetime, record
/// serialization, wire-level retries, and remote error translation; the
/// dispatch core treats the whole trait as a black box. Write verbs report a
/// boolean outcome; read verbs report their payload, with success implied by
/// `Ok`. An `Err` is a collaborator fault (connection loss, protocol
/// violation) and propagates above the `OperationResult` contract.
#[async_trait]
pub trait StoreServiceClient: Send + Sync {
    /// Write the given records into one region.
    async fn kv_put(
        &self,
        table: &TableId,
        region_id: RegionId,
        records: Vec<KeyValue>,
    ) -> anyhow::Result<bool>;

    /// Write a bulk batch of records into one region.
    async fn kv_batch_put(
        &self,
        table: &TableId,
        region_id: RegionId,
        records: Vec<KeyValue>,
    ) -> anyhow::Result<bool>;

    /// Read the records for the given keys. Missing keys are absent from the
    /// returned list.
    async fn kv_get(
        &self,
        table: &TableId,
        region_id: RegionId,
        keys: Vec<Bytes>,
    ) -> anyhow::Result<Vec<KeyValue>>;

    /// Read a bulk batch of keys.
    async fn kv_batch_get(
        &self,
        table: &TableId,
        region_id: RegionId,
        keys: Vec<Bytes>,
    ) -> anyhow::Result<Vec<KeyValue>>;

    /// Delete the given keys.
    async fn kv_delete(
        &self,
        table: &TableId,
        region_id: RegionId,
        keys: Vec<Bytes>,
    ) -> anyhow::Result<bool>;

    /// Return all records of one region whose keys fall in `range`.
    async fn kv_scan(
        &self,
        table: &TableId,
        region_id: RegionId,
        range: KeyRange,
    ) -> anyhow::Result<Vec<KeyValue>>;
}
