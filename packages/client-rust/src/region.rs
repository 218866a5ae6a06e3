//! Region routing: maps keys and key ranges to the regions that own them.
//!
//! A region owns a contiguous key range; the table keeps one entry per
//! region, keyed by the region's start key. The owner of a key is the region
//! with the greatest start key `<=` the key. A table whose first region
//! starts at the empty key covers the whole keyspace.
//!
//! The table is versioned the same way cluster metadata is: a refresh
//! collaborator replaces the whole table when region boundaries move; the
//! dispatch core only ever reads it.

use std::collections::BTreeMap;
use std::ops::Bound;

use bytes::Bytes;

use crate::types::{KeyRange, RegionId};

// ---------------------------------------------------------------------------
// RegionLookup trait
// ---------------------------------------------------------------------------

/// Read-only region ownership queries.
pub trait RegionLookup: Send + Sync {
    /// Region owning `key`, if any region's range covers it.
    fn region_for_key(&self, key: &[u8]) -> Option<RegionId>;

    /// All regions overlapping the half-open `range`, in key order.
    fn regions_for_range(&self, range: &KeyRange) -> Vec<RegionId>;

    /// Routing table version.
    fn version(&self) -> u32;
}

// ---------------------------------------------------------------------------
// RegionTable
// ---------------------------------------------------------------------------

/// Versioned start-key to region lookup table.
///
/// Backed by a `BTreeMap` so the owning region is one `range().next_back()`
/// away and range fan-out is an ordered walk.
pub struct RegionTable {
    starts: BTreeMap<Bytes, RegionId>,
    version: u32,
}

impl RegionTable {
    /// Creates an empty table with version 0. Every lookup misses until
    /// regions are inserted.
    #[must_use]
    pub fn new() -> Self {
        Self {
            starts: BTreeMap::new(),
            version: 0,
        }
    }

    /// Builds a table from `(start_key, region)` pairs at the given version.
    #[must_use]
    pub fn from_splits(version: u32, splits: impl IntoIterator<Item = (Bytes, RegionId)>) -> Self {
        Self {
            starts: splits.into_iter().collect(),
            version,
        }
    }

    /// Insert a region starting at `start_key`, replacing any region with the
    /// same start.
    pub fn insert(&mut self, start_key: impl Into<Bytes>, region_id: RegionId) {
        self.starts.insert(start_key.into(), region_id);
    }

    pub fn set_version(&mut self, version: u32) {
        self.version = version;
    }

    #[must_use]
    pub fn region_count(&self) -> usize {
        self.starts.len()
    }
}

impl Default for RegionTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionLookup for RegionTable {
    fn region_for_key(&self, key: &[u8]) -> Option<RegionId> {
        self.starts
            .range::<[u8], _>((Bound::Unbounded, Bound::Included(key)))
            .next_back()
            .map(|(_, region_id)| *region_id)
    }

    fn regions_for_range(&self, range: &KeyRange) -> Vec<RegionId> {
        if range.start >= range.end {
            return Vec::new();
        }
        let mut regions = Vec::new();
        if let Some(first) = self.region_for_key(&range.start) {
            regions.push(first);
        }
        // Regions whose start falls inside (start, end) also overlap.
        let inner = self.starts.range::<[u8], _>((
            Bound::Excluded(range.start.as_ref()),
            Bound::Excluded(range.end.as_ref()),
        ));
        for (_, region_id) in inner {
            if regions.last() != Some(region_id) {
                regions.push(*region_id);
            }
        }
        regions
    }

    fn version(&self) -> u32 {
        self.version
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
