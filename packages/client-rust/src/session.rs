//! Caller-facing session: table handle + routing + dispatch.
//!
//! A [`StoreSession`] owns what a single dispatch call cannot: it resolves
//! the owning region for each key through a [`RegionLookup`], groups batch
//! payloads by region, chunks oversized groups at the configured wire-call
//! limit, and folds the per-region results back into one. The dispatch core
//! below it still issues exactly one remote call per operation.

use std::collections::BTreeMap;
use std::sync::Arc;

use bytes::Bytes;

use crate::config::ClientConfig;
use crate::context::OperationContext;
use crate::dispatcher::Dispatcher;
use crate::operation::{DispatchError, Verb};
use crate::region::RegionLookup;
use crate::result::OperationResult;
use crate::service::StoreServiceClient;
use crate::types::{KeyRange, KeyValue, RegionId, TableId};

/// Errors surfaced by session operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The routing table has no region covering the key. Usually means the
    /// metadata refresh collaborator has not populated the table yet.
    #[error("no region owns key {key:?} (routing table version {version})")]
    NoRegionForKey { key: Bytes, version: u32 },
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// Long-lived handle for issuing operations against one table.
///
/// Cheap to clone; all shared parts sit behind `Arc`. The service client and
/// region lookup outlive any single operation, exactly as the session that
/// supplies them does.
#[derive(Clone)]
pub struct StoreSession {
    table: TableId,
    client: Arc<dyn StoreServiceClient>,
    regions: Arc<dyn RegionLookup>,
    dispatcher: Arc<Dispatcher>,
    config: ClientConfig,
}

impl StoreSession {
    /// Session with the built-in dispatcher and default configuration.
    #[must_use]
    pub fn new(
        table: TableId,
        client: Arc<dyn StoreServiceClient>,
        regions: Arc<dyn RegionLookup>,
    ) -> Self {
        Self::with_config(table, client, regions, ClientConfig::default())
    }

    #[must_use]
    pub fn with_config(
        table: TableId,
        client: Arc<dyn StoreServiceClient>,
        regions: Arc<dyn RegionLookup>,
        config: ClientConfig,
    ) -> Self {
        Self {
            table,
            client,
            regions,
            dispatcher: Arc::new(Dispatcher::new()),
            config,
        }
    }

    #[must_use]
    pub fn table(&self) -> &TableId {
        &self.table
    }

    fn resolve(&self, key: &[u8]) -> Result<RegionId, ClientError> {
        self.regions
            .region_for_key(key)
            .ok_or_else(|| ClientError::NoRegionForKey {
                key: Bytes::copy_from_slice(key),
                version: self.regions.version(),
            })
    }

    async fn dispatch(
        &self,
        verb: Verb,
        ctx: OperationContext,
    ) -> Result<OperationResult, ClientError> {
        let result = self
            .dispatcher
            .dispatch(verb, &self.table, self.client.as_ref(), ctx)
            .await?;
        Ok(result)
    }

    /// Write one record.
    ///
    /// # Errors
    ///
    /// `NoRegionForKey` when the key is unroutable; dispatch errors pass
    /// through.
    pub async fn put(
        &self,
        key: impl Into<Bytes>,
        value: impl Into<Bytes>,
    ) -> Result<OperationResult, ClientError> {
        let record = KeyValue::new(key, value);
        let region_id = self.resolve(&record.key)?;
        self.dispatch(
            Verb::Put,
            OperationContext::with_records(region_id, vec![record]),
        )
        .await
    }

    /// Read one key. The record, if present, is the result's payload.
    ///
    /// # Errors
    ///
    /// `NoRegionForKey` when the key is unroutable; dispatch errors pass
    /// through.
    pub async fn get(&self, key: impl Into<Bytes>) -> Result<OperationResult, ClientError> {
        let key = key.into();
        let region_id = self.resolve(&key)?;
        self.dispatch(Verb::Get, OperationContext::with_keys(region_id, vec![key]))
            .await
    }

    /// Delete one key.
    ///
    /// # Errors
    ///
    /// `NoRegionForKey` when the key is unroutable; dispatch errors pass
    /// through.
    pub async fn delete(&self, key: impl Into<Bytes>) -> Result<OperationResult, ClientError> {
        let key = key.into();
        let region_id = self.resolve(&key)?;
        self.dispatch(
            Verb::Delete,
            OperationContext::with_keys(region_id, vec![key]),
        )
        .await
    }

    /// Write a batch of records, one dispatch per owning region per chunk.
    ///
    /// The first failed per-region result is returned as the folded outcome;
    /// earlier chunks stay written (the core never retries or rolls back).
    ///
    /// # Errors
    ///
    /// `NoRegionForKey` when any record's key is unroutable; dispatch errors
    /// pass through.
    pub async fn batch_put(&self, records: Vec<KeyValue>) -> Result<OperationResult, ClientError> {
        let groups = self.group_records(records)?;
        for (region_id, group) in groups {
            for chunk in Chunks::new(group, self.config.max_records_per_call) {
                let result = self
                    .dispatch(
                        Verb::BatchPut,
                        OperationContext::with_records(region_id, chunk),
                    )
                    .await?;
                if !result.is_ok() {
                    return Ok(result);
                }
            }
        }
        Ok(OperationResult::success())
    }

    /// Read a batch of keys, one dispatch per owning region per chunk.
    ///
    /// On success the folded result concatenates every region's records.
    ///
    /// # Errors
    ///
    /// `NoRegionForKey` when any key is unroutable; dispatch errors pass
    /// through.
    pub async fn batch_get(&self, keys: Vec<Bytes>) -> Result<OperationResult, ClientError> {
        let mut groups: BTreeMap<RegionId, Vec<Bytes>> = BTreeMap::new();
        for key in keys {
            let region_id = self.resolve(&key)?;
            groups.entry(region_id).or_default().push(key);
        }

        let mut found = Vec::new();
        for (region_id, group) in groups {
            for chunk in Chunks::new(group, self.config.max_records_per_call) {
                let result = self
                    .dispatch(Verb::BatchGet, OperationContext::with_keys(region_id, chunk))
                    .await?;
                if !result.is_ok() {
                    return Ok(result);
                }
                found.extend(result.into_records());
            }
        }
        Ok(OperationResult::with_records(found))
    }

    /// Scan a key range, one dispatch per overlapping region.
    ///
    /// Each region returns only the subset of the range it owns; regions are
    /// visited in key order, so the concatenated payload stays ordered.
    ///
    /// # Errors
    ///
    /// Dispatch errors pass through.
    pub async fn scan(&self, range: KeyRange) -> Result<OperationResult, ClientError> {
        let mut found = Vec::new();
        for region_id in self.regions.regions_for_range(&range) {
            let result = self
                .dispatch(
                    Verb::Scan,
                    OperationContext::with_range(region_id, range.clone()),
                )
                .await?;
            if !result.is_ok() {
                return Ok(result);
            }
            found.extend(result.into_records());
        }
        Ok(OperationResult::with_records(found))
    }

    fn group_records(
        &self,
        records: Vec<KeyValue>,
    ) -> Result<BTreeMap<RegionId, Vec<KeyValue>>, ClientError> {
        let mut groups: BTreeMap<RegionId, Vec<KeyValue>> = BTreeMap::new();
        for record in records {
            let region_id = self.resolve(&record.key)?;
            groups.entry(region_id).or_default().push(record);
        }
        Ok(groups)
    }
}

/// Splits an owned `Vec` into chunks of at most `size`, preserving order.
struct Chunks<T> {
    items: std::vec::IntoIter<T>,
    size: usize,
}

impl<T> Chunks<T> {
    fn new(items: Vec<T>, size: usize) -> Self {
        Self {
            items: items.into_iter(),
            size: size.max(1),
        }
    }
}

impl<T> Iterator for Chunks<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        let chunk: Vec<T> = self.items.by_ref().take(self.size).collect();
        if chunk.is_empty() {
            None
        } else {
            Some(chunk)
        }
    }
}
