use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{PipelineError, Result};
use crate::pipeline::RunReport;
use crate::types::{CleanRecord, RawRecord};

/// Columns that must exist in the raw export for the run to make sense.
/// Their values may still be empty per-row; that is handled downstream.
const REQUIRED_COLUMNS: &[&str] = &["title", "location", "company", "updated", "link"];

/// Reads the raw export into memory. An unreadable file or a header missing
/// a required column is fatal; individual malformed rows are skipped with a
/// warning, per the row-level error model.
pub fn read_raw(path: &Path) -> Result<Vec<RawRecord>> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(PipelineError::MissingColumn(column.to_string()));
        }
    }

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for row in reader.deserialize::<RawRecord>() {
        match row {
            Ok(record) => records.push(record),
            Err(e) => {
                skipped += 1;
                warn!("skipping malformed row: {}", e);
            }
        }
    }
    info!(rows = records.len(), skipped, "raw export loaded");
    Ok(records)
}

/// Returns the header row and record count of a raw export without fully
/// deserializing it.
pub fn inspect_raw(path: &Path) -> Result<(Vec<String>, usize)> {
    let mut reader = csv::Reader::from_path(path)?;
    let columns: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let rows = reader.records().filter(|r| r.is_ok()).count();
    Ok((columns, rows))
}

/// Output columns, in the order the dashboard expects them.
const OUTPUT_COLUMNS: &[&str] = &[
    "Job_Title",
    "Job_Title_Cleaned",
    "Job_Level",
    "Company",
    "Location",
    "City",
    "Salary",
    "Job_Type",
    "Description",
    "Posted_On",
    "Job_Link",
    "Country",
];

/// Writes the cleaned table in one shot. The header row is written
/// explicitly so a run where every record was filtered out still produces a
/// well-formed, header-only table. The rows go to a temp file beside the
/// target which is then renamed over it, so a crash mid-write never leaves a
/// partial output behind.
pub fn write_clean(path: &Path, records: &[CleanRecord]) -> Result<()> {
    let tmp_path = path.with_extension("csv.tmp");
    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&tmp_path)?;
        writer.write_record(OUTPUT_COLUMNS)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
    }
    fs::rename(&tmp_path, path)?;
    info!(rows = records.len(), path = %path.display(), "cleaned table written");
    Ok(())
}

/// Persists the per-stage run report as a JSON sidecar.
pub fn write_report(path: &Path, report: &RunReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CleanConfig;
    use crate::pipeline::Pipeline;
    use tempfile::tempdir;

    const RAW_HEADER: &str = "title,location,company,salary,type,updated,snippet,link,Country";

    #[test]
    fn read_raw_skips_nothing_on_well_formed_input() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("raw.csv");
        fs::write(
            &path,
            format!(
                "{}\nData Analyst,\"Toronto, ON\",Acme,,Full-time,2025-08-20T09:00:00,desc,https://x.io/1,Canada\n",
                RAW_HEADER
            ),
        )
        .unwrap();

        let records = read_raw(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].location.as_deref(), Some("Toronto, ON"));
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("raw.csv");
        fs::write(&path, "title,location,company\nA,B,C\n").unwrap();

        let err = read_raw(&path).unwrap_err();
        assert!(matches!(err, PipelineError::MissingColumn(ref c) if c == "updated"));
    }

    #[test]
    fn missing_file_is_fatal() {
        assert!(read_raw(Path::new("no/such/file.csv")).is_err());
    }

    #[test]
    fn empty_table_still_writes_header_row() {
        let dir = tempdir().unwrap();
        let out_path = dir.path().join("clean.csv");

        write_clean(&out_path, &[]).unwrap();

        let written = fs::read_to_string(&out_path).unwrap();
        assert!(written.starts_with("Job_Title,Job_Title_Cleaned,Job_Level,"));
        assert!(written.trim_end().ends_with(",Job_Link,Country"));
        assert_eq!(written.lines().count(), 1);
    }

    #[test]
    fn clean_table_round_trips_through_csv() {
        let dir = tempdir().unwrap();
        let raw_path = dir.path().join("raw.csv");
        let out_path = dir.path().join("clean.csv");
        fs::write(
            &raw_path,
            format!(
                "{}\nSenior Data Analyst,\"Toronto, ON\",Acme,,Full-time,2025-08-20T09:00:00,desc,https://x.io/1,Canada\n",
                RAW_HEADER
            ),
        )
        .unwrap();

        let raw_records = read_raw(&raw_path).unwrap();
        let (clean, _) = Pipeline::new(CleanConfig::default()).run(raw_records);
        write_clean(&out_path, &clean).unwrap();

        let mut reader = csv::Reader::from_path(&out_path).unwrap();
        let reread: Vec<CleanRecord> = reader
            .deserialize()
            .collect::<std::result::Result<_, _>>()
            .unwrap();
        assert_eq!(reread, clean);
        assert!(!out_path.with_extension("csv.tmp").exists());
    }
}
