use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use num_format::{Locale, ToFormattedString};
use tracing::info;

use crate::{
    analytics::AddressStats, error::ReportError, ingest::parse_log_file, output::OutputFormat,
    report::compute_report,
};

/// Reads `input`, ranks its client addresses and writes the report to
/// `output`, replacing any existing file.
///
/// The report is rendered in memory and written to a temporary file next to
/// `output`, which is then renamed over it. A failed run leaves any previous
/// report as it was.
pub fn generate_report(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<(), ReportError> {
    let (input, output) = (input.as_ref(), output.as_ref());

    let ingested = parse_log_file(input)?;
    info!(
        input = %input.display(),
        accepted = %ingested.records.len().to_formatted_string(&Locale::en),
        rejected = %ingested.rejected.to_formatted_string(&Locale::en),
        "parsed access log"
    );

    let stats = AddressStats::aggregate(&ingested.records);
    let report = compute_report(&stats);

    let mut rendered = Vec::new();
    format.render(&report, &mut rendered)?;

    write_replacing(output, &rendered)?;
    info!(
        output = %output.display(),
        %format,
        addresses = %report.len().to_formatted_string(&Locale::en),
        "wrote report"
    );
    Ok(())
}

fn write_replacing(output: &Path, contents: &[u8]) -> Result<(), ReportError> {
    let parent = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent).map_err(|e| ReportError::file_access(&parent, e))?;

    let mut staged =
        NamedTempFile::new_in(&parent).map_err(|e| ReportError::file_access(&parent, e))?;
    staged
        .write_all(contents)
        .and_then(|()| staged.as_file().sync_all())
        .map_err(|e| ReportError::file_access(staged.path(), e))?;
    staged
        .persist(output)
        .map_err(|e| ReportError::file_access(output, e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use asserting::prelude::*;

    const LOG: &str = "\
2024-01-01T00:00:00;100;OK;1.1.1.1
2024-01-01T00:00:01;100;FAIL;9.9.9.9

2024-01-01T00:00:02;300;OK;2.2.2.2
2024-01-01T00:00:03;100;OK;1.1.1.1
broken;line
2024-01-01T00:00:04;-5;OK;1.1.1.1
";

    #[test]
    fn writes_csv_report() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("requests.log");
        let output = dir.path().join("reports").join("ipaddr.csv");
        fs::write(&input, LOG).unwrap();

        generate_report(&input, &output, OutputFormat::Csv).unwrap();

        assert_that!(fs::read_to_string(&output).unwrap()).is_equal_to(
            "IP Address,Number of Requests,Percentage of Total Requests,Total Bytes Sent,Percentage of Total Bytes\n\
             1.1.1.1,2,66.67,200,40.00\n\
             2.2.2.2,1,33.33,300,60.00\n"
                .to_string(),
        );
    }

    #[test]
    fn writes_json_report_over_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("requests.log");
        let output = dir.path().join("ipaddr.json");
        fs::write(&input, LOG).unwrap();
        fs::write(&output, "stale contents that are much longer than nothing").unwrap();

        generate_report(&input, &output, OutputFormat::Json).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(value[0]["ip_address"], "1.1.1.1");
        assert_eq!(value[0]["requests"], 2);
        assert_eq!(value[1]["ip_address"], "2.2.2.2");
        assert_eq!(value[1]["bytes"], 300);
    }

    #[test]
    fn missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.csv");

        let err = generate_report(dir.path().join("absent.log"), &output, OutputFormat::Csv)
            .unwrap_err();

        assert!(matches!(err, ReportError::FileAccess { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn unwritable_output_is_file_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("requests.log");
        fs::write(&input, LOG).unwrap();

        // a directory where the file should go
        let output = dir.path().join("taken");
        fs::create_dir(&output).unwrap();
        fs::write(output.join("keep.txt"), "kept").unwrap();

        let err = generate_report(&input, &output, OutputFormat::Csv).unwrap_err();

        assert!(matches!(err, ReportError::FileAccess { .. }));
        assert_that!(fs::read_to_string(output.join("keep.txt")).unwrap())
            .is_equal_to("kept".to_string());
        let mut left: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        left.sort();
        assert_that!(left).is_equal_to(vec!["requests.log".to_string(), "taken".to_string()]);
    }

    #[test]
    fn failed_run_keeps_previous_report() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("ipaddr.csv");
        fs::write(&output, "previous report").unwrap();

        let err = generate_report(dir.path().join("absent.log"), &output, OutputFormat::Csv)
            .unwrap_err();

        assert!(matches!(err, ReportError::FileAccess { .. }));
        assert_that!(fs::read_to_string(&output).unwrap())
            .is_equal_to("previous report".to_string());
    }

    #[test]
    fn huge_byte_counts_are_summed_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("requests.log");
        let output = dir.path().join("ipaddr.csv");
        fs::write(
            &input,
            "t;18446744073709551615;OK;1.1.1.1\nt;1;OK;1.1.1.1\nt;1;OK;2.2.2.2\n",
        )
        .unwrap();

        generate_report(&input, &output, OutputFormat::Csv).unwrap();

        let csv = fs::read_to_string(&output).unwrap();
        let lines: Vec<_> = csv.lines().skip(1).collect();
        assert_that!(lines).is_equal_to(vec![
            "1.1.1.1,2,66.67,18446744073709551616,100.00",
            "2.2.2.2,1,33.33,1,0.00",
        ]);
    }

    #[test]
    fn empty_log_gives_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("requests.log");
        let output = dir.path().join("out.csv");
        fs::write(&input, "\n\n").unwrap();

        generate_report(&input, &output, OutputFormat::Csv).unwrap();

        assert_that!(fs::read_to_string(&output).unwrap().lines().count()).is_equal_to(1);
    }
}
