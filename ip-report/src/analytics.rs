use std::collections::{BTreeMap, btree_map};

use crate::{invariants::Address, models::LogRecord};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counters {
    pub requests: u64,
    /// Wider than a single record's byte count so sums of `u64::MAX`-sized
    /// records cannot overflow.
    pub bytes: u128,
}

/// Per-address request counts and byte totals.
///
/// Keyed by an ordered map so iteration, and everything derived from it, is
/// the same on every run for the same input.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AddressStats {
    by_address: BTreeMap<Address, Counters>,
}

impl AddressStats {
    pub fn aggregate<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a LogRecord>,
    {
        let mut stats = Self::default();
        for record in records {
            stats.record(record);
        }
        stats
    }

    pub fn record(&mut self, record: &LogRecord) {
        let counters = self.by_address.entry(record.address.clone()).or_default();
        counters.requests += 1;
        counters.bytes += u128::from(record.bytes);
    }

    /// Folds counters built over another chunk of records into this one.
    pub fn merge(&mut self, other: AddressStats) {
        for (address, theirs) in other.by_address {
            let ours = self.by_address.entry(address).or_default();
            ours.requests += theirs.requests;
            ours.bytes += theirs.bytes;
        }
    }

    pub fn get(&self, address: &str) -> Option<Counters> {
        self.by_address.get(address).copied()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Address, Counters> {
        self.by_address.iter()
    }

    pub fn len(&self) -> usize {
        self.by_address.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_address.is_empty()
    }

    pub fn total_requests(&self) -> u64 {
        self.by_address.values().map(|c| c.requests).sum()
    }

    pub fn total_bytes(&self) -> u128 {
        self.by_address.values().map(|c| c.bytes).sum()
    }
}

impl<'a> IntoIterator for &'a AddressStats {
    type Item = (&'a Address, &'a Counters);
    type IntoIter = btree_map::Iter<'a, Address, Counters>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
pub(crate) fn stats_from(entries: &[(&str, u64, u128)]) -> AddressStats {
    AddressStats {
        by_address: entries
            .iter()
            .map(|(address, requests, bytes)| {
                (
                    address.parse().unwrap(),
                    Counters {
                        requests: *requests,
                        bytes: *bytes,
                    },
                )
            })
            .collect(),
    }
}
