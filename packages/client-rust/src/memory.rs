//! In-memory [`StoreServiceClient`] implementation backed by [`DashMap`].
//!
//! A transport stand-in for development and tests. Entries are keyed by
//! `(table, region, key)`, so each region holds its own slice of the
//! keyspace just like a real region-sharded store: an operation routed to
//! the wrong region sees the wrong data. Knobs:
//!
//! - [`MemoryStoreClient::fail_writes`]: write verbs report `Ok(false)`
//! - [`MemoryStoreClient::inject_fault`]: every verb raises a client fault
//!
//! Per-verb call counters let tests pin down exactly how many remote calls
//! a dispatch produced.

use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::anyhow;
use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;
use parking_lot::Mutex;

use crate::operation::Verb;
use crate::service::StoreServiceClient;
use crate::types::{KeyRange, KeyValue, RegionId, TableId};

type EntryKey = (String, RegionId, Bytes);

/// In-memory region-sharded store.
pub struct MemoryStoreClient {
    entries: DashMap<EntryKey, Bytes>,
    calls: DashMap<Verb, u64>,
    fail_writes: AtomicBool,
    fault: Mutex<Option<String>>,
}

impl MemoryStoreClient {
    /// Creates an empty, healthy client.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            calls: DashMap::new(),
            fail_writes: AtomicBool::new(false),
            fault: Mutex::new(None),
        }
    }

    /// When enabled, write verbs complete with a `false` outcome.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent call raise a fault with the given message.
    pub fn inject_fault(&self, message: impl Into<String>) {
        *self.fault.lock() = Some(message.into());
    }

    /// Number of remote calls recorded for one verb.
    #[must_use]
    pub fn call_count(&self, verb: Verb) -> u64 {
        self.calls.get(&verb).map_or(0, |count| *count)
    }

    /// Number of remote calls recorded across all verbs.
    #[must_use]
    pub fn total_calls(&self) -> u64 {
        self.calls.iter().map(|entry| *entry.value()).sum()
    }

    fn record_call(&self, verb: Verb) -> anyhow::Result<()> {
        *self.calls.entry(verb).or_insert(0) += 1;
        if let Some(message) = self.fault.lock().clone() {
            return Err(anyhow!(message));
        }
        Ok(())
    }

    fn write_outcome(&self) -> bool {
        !self.fail_writes.load(Ordering::SeqCst)
    }

    fn store_records(&self, table: &TableId, region_id: RegionId, records: Vec<KeyValue>) {
        for record in records {
            self.entries.insert(
                (table.as_str().to_string(), region_id, record.key),
                record.value,
            );
        }
    }

    fn lookup(&self, table: &TableId, region_id: RegionId, keys: &[Bytes]) -> Vec<KeyValue> {
        keys.iter()
            .filter_map(|key| {
                self.entries
                    .get(&(table.as_str().to_string(), region_id, key.clone()))
                    .map(|value| KeyValue::new(key.clone(), value.clone()))
            })
            .collect()
    }
}

impl Default for MemoryStoreClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StoreServiceClient for MemoryStoreClient {
    async fn kv_put(
        &self,
        table: &TableId,
        region_id: RegionId,
        records: Vec<KeyValue>,
    ) -> anyhow::Result<bool> {
        self.record_call(Verb::Put)?;
        if !self.write_outcome() {
            return Ok(false);
        }
        self.store_records(table, region_id, records);
        Ok(true)
    }

    async fn kv_batch_put(
        &self,
        table: &TableId,
        region_id: RegionId,
        records: Vec<KeyValue>,
    ) -> anyhow::Result<bool> {
        self.record_call(Verb::BatchPut)?;
        if !self.write_outcome() {
            return Ok(false);
        }
        self.store_records(table, region_id, records);
        Ok(true)
    }

    async fn kv_get(
        &self,
        table: &TableId,
        region_id: RegionId,
        keys: Vec<Bytes>,
    ) -> anyhow::Result<Vec<KeyValue>> {
        self.record_call(Verb::Get)?;
        Ok(self.lookup(table, region_id, &keys))
    }

    async fn kv_batch_get(
        &self,
        table: &TableId,
        region_id: RegionId,
        keys: Vec<Bytes>,
    ) -> anyhow::Result<Vec<KeyValue>> {
        self.record_call(Verb::BatchGet)?;
        Ok(self.lookup(table, region_id, &keys))
    }

    async fn kv_delete(
        &self,
        table: &TableId,
        region_id: RegionId,
        keys: Vec<Bytes>,
    ) -> anyhow::Result<bool> {
        self.record_call(Verb::Delete)?;
        if !self.write_outcome() {
            return Ok(false);
        }
        for key in keys {
            self.entries
                .remove(&(table.as_str().to_string(), region_id, key));
        }
        Ok(true)
    }

    async fn kv_scan(
        &self,
        table: &TableId,
        region_id: RegionId,
        range: KeyRange,
    ) -> anyhow::Result<Vec<KeyValue>> {
        self.record_call(Verb::Scan)?;
        let mut records: Vec<KeyValue> = self
            .entries
            .iter()
            .filter(|entry| {
                let (entry_table, entry_region, key) = entry.key();
                entry_table == table.as_str() && *entry_region == region_id && range.contains(key)
            })
            .map(|entry| KeyValue::new(entry.key().2.clone(), entry.value().clone()))
            .collect();
        records.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(records)
    }
}
