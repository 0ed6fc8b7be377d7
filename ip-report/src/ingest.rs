use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use tracing::debug;

use crate::{error::ReportError, models::LogRecord};

const STATUS_OK: &str = "OK";

/// Records accepted from one log file, in file order.
#[derive(Debug, Default)]
pub struct Ingested {
    pub records: Vec<LogRecord>,
    /// Non-blank lines that produced no record: malformed, negative bytes,
    /// blank address or a status other than `OK`.
    pub rejected: usize,
}

pub fn parse_log_file(path: &Path) -> Result<Ingested, ReportError> {
    let file = File::open(path).map_err(|e| ReportError::file_access(path, e))?;
    let reader = BufReader::new(file);

    let mut ingested = Ingested::default();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| ReportError::file_access(path, e))?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_log_line(&line) {
            Some(record) => ingested.records.push(record),
            None => {
                ingested.rejected += 1;
                debug!(line = index + 1, "skipping log line");
            }
        }
    }
    Ok(ingested)
}

/// Parses `timestamp;bytes_sent;status;address`.
///
/// Returns `None` for anything that should not be counted, the caller does
/// not need to know why.
pub fn parse_log_line(line: &str) -> Option<LogRecord> {
    let mut parts = line.trim().split(';');
    let _timestamp = parts.next()?;
    let bytes = parts.next()?;
    let status = parts.next()?;
    let address = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    if status != STATUS_OK {
        return None;
    }
    // i128 so "-0" is accepted; digit separators such as "1_000" are rejected
    let bytes: i128 = bytes.trim().parse().ok()?;
    let bytes = u64::try_from(bytes).ok()?;
    let address = address.parse().ok()?;
    Some(LogRecord { address, bytes })
}
