//! Table and Report Writers

use crate::error::ExportError;
use csv::Writer;
use serde::Serialize;
use std::fs::File;
use std::path::Path;
use tracing::info;
use turbofan_data::{LabeledRecord, CHANNEL_NAMES};

/// Write labeled records as CSV with header `unit,cycle,setting1..s21,rul`.
///
/// Rows are written in the order given; floats use the shortest round-trip
/// formatting, so repeated runs over the same input yield byte-identical
/// files.
pub fn write_labeled_csv<P: AsRef<Path>>(
    records: &[LabeledRecord],
    path: P,
) -> Result<(), ExportError> {
    let mut writer = Writer::from_path(&path)?;

    let mut header = vec!["unit", "cycle"];
    header.extend(CHANNEL_NAMES);
    header.push("rul");
    writer.write_record(&header)?;

    for labeled in records {
        let mut row = Vec::with_capacity(header.len());
        row.push(labeled.record.unit.to_string());
        row.push(labeled.record.cycle.to_string());
        for &value in &labeled.record.channels {
            row.push(value.to_string());
        }
        row.push(labeled.rul.to_string());
        writer.write_record(&row)?;
    }

    writer.flush()?;
    info!(
        rows = records.len(),
        path = %path.as_ref().display(),
        "wrote labeled table"
    );
    Ok(())
}

/// Write any serializable value as pretty-printed JSON
pub fn write_json<T: Serialize, P: AsRef<Path>>(value: &T, path: P) -> Result<(), ExportError> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, value)?;
    Ok(())
}

/// Create a directory (and parents) if it does not exist
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<(), ExportError> {
    if !path.as_ref().exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use turbofan_data::CycleRecord;

    fn labeled(unit: u32, cycle: u32, value: f64, rul: u32) -> LabeledRecord {
        LabeledRecord {
            record: CycleRecord::uniform(unit, cycle, value),
            rul,
        }
    }

    #[test]
    fn test_csv_header_and_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let records = vec![labeled(1, 1, 0.5, 2), labeled(1, 2, 0.75, 1)];

        write_labeled_csv(&records, &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();

        let header = lines.next().unwrap();
        assert!(header.starts_with("unit,cycle,setting1,setting2,setting3,s1,"));
        assert!(header.ends_with("s21,rul"));

        let first = lines.next().unwrap();
        assert!(first.starts_with("1,1,0.5,"));
        assert!(first.ends_with(",2"));
        assert_eq!(lines.count(), 1);
    }

    #[test]
    fn test_csv_idempotent_bytes() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.csv");
        let b = dir.path().join("b.csv");
        let records = vec![labeled(1, 1, 0.3333333333333333, 0)];

        write_labeled_csv(&records, &a).unwrap();
        write_labeled_csv(&records, &b).unwrap();
        assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());
    }

    #[test]
    fn test_ensure_dir_nested() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b/c");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        ensure_dir(&nested).unwrap();
    }
}
