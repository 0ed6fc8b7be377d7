use std::cmp::Reverse;

use serde::Serialize;

use crate::{analytics::AddressStats, invariants::Address};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    #[serde(rename = "ip_address")]
    pub address: Address,
    pub requests: u64,
    pub requests_pct: f64,
    pub bytes: u128,
    pub bytes_pct: f64,
}

/// Rows ranked by request count, then bytes, both descending.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Report {
    rows: Vec<ReportRow>,
}

impl Report {
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total_requests(&self) -> u64 {
        self.rows.iter().map(|r| r.requests).sum()
    }

    pub fn total_bytes(&self) -> u128 {
        self.rows.iter().map(|r| r.bytes).sum()
    }
}

pub fn compute_report(stats: &AddressStats) -> Report {
    let total_requests = stats.total_requests();
    let total_bytes = stats.total_bytes();

    let mut rows: Vec<_> = stats
        .iter()
        .map(|(address, counters)| ReportRow {
            address: address.clone(),
            requests: counters.requests,
            requests_pct: percentage(counters.requests.into(), total_requests.into()),
            bytes: counters.bytes,
            bytes_pct: percentage(counters.bytes, total_bytes),
        })
        .collect();
    // stable, so full ties keep the address order of the stats map
    rows.sort_by_key(|row| Reverse((row.requests, row.bytes)));

    Report { rows }
}

fn percentage(part: u128, total: u128) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}
