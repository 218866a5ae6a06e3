use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Opaque identifier for a logical table.
///
/// Supplied by the caller's session, already resolved against cluster
/// metadata. The dispatch core passes it through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableId(String);

impl TableId {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a physical region (one contiguous shard of a table's key
/// range, served by one replica group).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RegionId(pub u64);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region-{}", self.0)
    }
}

/// A single row/value pair.
///
/// Keys and values are opaque bytes; record (de)serialization belongs to the
/// transport collaborator. `Bytes` keeps clones cheap when batch payloads are
/// regrouped by owning region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValue {
    pub key: Bytes,
    pub value: Bytes,
}

impl KeyValue {
    #[must_use]
    pub fn new(key: impl Into<Bytes>, value: impl Into<Bytes>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Half-open key interval `[start, end)`.
///
/// Used as the scan payload and for region fan-out. An empty `end` is not
/// given special meaning here; callers wanting an unbounded scan pass the
/// table's maximum key as `end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRange {
    pub start: Bytes,
    pub end: Bytes,
}

impl KeyRange {
    #[must_use]
    pub fn new(start: impl Into<Bytes>, end: impl Into<Bytes>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Whether `key` falls inside `[start, end)`.
    #[must_use]
    pub fn contains(&self, key: &[u8]) -> bool {
        key >= self.start.as_ref() && key < self.end.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_range_contains_is_half_open() {
        let range = KeyRange::new(&b"b"[..], &b"d"[..]);
        assert!(!range.contains(b"a"));
        assert!(range.contains(b"b"));
        assert!(range.contains(b"c"));
        assert!(!range.contains(b"d"));
        assert!(!range.contains(b"e"));
    }

    #[test]
    fn table_id_round_trips_name() {
        let table = TableId::new("users");
        assert_eq!(table.as_str(), "users");
        assert_eq!(table.to_string(), "users");
    }

    #[test]
    fn region_id_display() {
        assert_eq!(RegionId(7).to_string(), "region-7");
    }
}
