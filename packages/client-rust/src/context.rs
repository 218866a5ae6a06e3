use bytes::Bytes;

use crate::types::{KeyRange, KeyValue, RegionId};

/// Per-call bundle of routing and payload data handed to a single
/// `StoreOperation::execute`.
///
/// Built once by the caller (or the session layer), consumed by exactly one
/// execute call, and never reused. One payload field is populated per verb
/// family: `records` for writes, `keys` for point reads and deletes, `range`
/// for scans. An empty payload is legal and short-circuits to a trivial
/// success without a remote call.
#[derive(Debug, Clone)]
pub struct OperationContext {
    /// Region the operation targets. Resolved by the caller's region lookup;
    /// the dispatch core does not validate ownership.
    pub region_id: RegionId,
    /// Row/value pairs to write (put and batch-put verbs).
    pub records: Vec<KeyValue>,
    /// Keys to read or delete (get, batch-get, delete verbs).
    pub keys: Vec<Bytes>,
    /// Key interval to scan (scan verb).
    pub range: Option<KeyRange>,
}

impl OperationContext {
    /// Context for a write verb.
    #[must_use]
    pub fn with_records(region_id: RegionId, records: Vec<KeyValue>) -> Self {
        Self {
            region_id,
            records,
            keys: Vec::new(),
            range: None,
        }
    }

    /// Context for a point-read or delete verb.
    #[must_use]
    pub fn with_keys(region_id: RegionId, keys: Vec<Bytes>) -> Self {
        Self {
            region_id,
            records: Vec::new(),
            keys,
            range: None,
        }
    }

    /// Context for a scan verb.
    #[must_use]
    pub fn with_range(region_id: RegionId, range: KeyRange) -> Self {
        Self {
            region_id,
            records: Vec::new(),
            keys: Vec::new(),
            range: Some(range),
        }
    }
}
