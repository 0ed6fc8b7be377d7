use std::{io::Write, str::FromStr};

use clap::ValueEnum;
use derive_more::Display;

use crate::{error::ReportError, report::Report};

const CSV_HEADER: [&str; 5] = [
    "IP Address",
    "Number of Requests",
    "Percentage of Total Requests",
    "Total Bytes Sent",
    "Percentage of Total Bytes",
];

#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    #[display("csv")]
    Csv,
    #[display("json")]
    Json,
}

impl OutputFormat {
    pub fn render<W: Write>(self, report: &Report, writer: W) -> Result<(), ReportError> {
        match self {
            Self::Csv => write_csv(report, writer),
            Self::Json => write_json(report, writer),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(ReportError::UnsupportedFormat(other.into())),
        }
    }
}

/// Header row, then one row per report row. Percentages get two decimals.
pub fn write_csv<W: Write>(report: &Report, writer: W) -> Result<(), ReportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(CSV_HEADER)?;
    for row in report.rows() {
        let requests = row.requests.to_string();
        let requests_pct = format!("{:.2}", row.requests_pct);
        let bytes = row.bytes.to_string();
        let bytes_pct = format!("{:.2}", row.bytes_pct);
        csv.write_record([
            row.address.as_str(),
            requests.as_str(),
            requests_pct.as_str(),
            bytes.as_str(),
            bytes_pct.as_str(),
        ])?;
    }
    csv.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Pretty-printed array of row objects, percentages unrounded.
pub fn write_json<W: Write>(report: &Report, mut writer: W) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.write_all(b"\n").map_err(serde_json::Error::io)?;
    Ok(())
}
