//! Raw File Parsing
//!
//! The raw files are whitespace-delimited with no header. Series rows carry
//! 26 numeric fields (unit, cycle, 3 settings, 21 sensors); the source files
//! end each row with trailing delimiters, which whitespace splitting absorbs.
//! RUL reference rows carry one meaningful leading integer, with a spurious
//! trailing column that is dropped.

use crate::error::IngestError;
use crate::record::{CycleRecord, NUM_CHANNELS, ROW_FIELDS};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Parse whitespace-delimited series rows into cycle records.
///
/// Blank lines are skipped. Any other row must yield exactly 26 numeric
/// fields or the parse fails with [`IngestError::MalformedRecord`] carrying
/// the 1-indexed line number.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<CycleRecord>, IngestError> {
    let mut records = Vec::new();

    for (idx, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != ROW_FIELDS {
            return Err(IngestError::MalformedRecord {
                line: line_no,
                reason: format!("expected {} fields, got {}", ROW_FIELDS, fields.len()),
            });
        }

        let unit = parse_index(fields[0], "unit", line_no)?;
        let cycle = parse_index(fields[1], "cycle", line_no)?;

        let mut channels = [0.0; NUM_CHANNELS];
        for (i, field) in fields[2..].iter().enumerate() {
            channels[i] = field.parse::<f64>().map_err(|e| IngestError::MalformedRecord {
                line: line_no,
                reason: format!("field {}: {e}", i + 3),
            })?;
        }

        records.push(CycleRecord { unit, cycle, channels });
    }

    debug!("parsed {} cycle records", records.len());
    Ok(records)
}

/// Parse the true-RUL reference file into positional values.
///
/// Line `i` (1-indexed, blank lines excluded) holds the true RUL at
/// truncation for unit `i`. Only the leading field is meaningful; anything
/// after it is a trailing-delimiter artifact and is ignored.
pub fn parse_rul_values<R: Read>(reader: R) -> Result<Vec<u32>, IngestError> {
    let mut values = Vec::new();

    for (idx, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let field = line
            .split_whitespace()
            .next()
            .ok_or_else(|| IngestError::MalformedRecord {
                line: line_no,
                reason: "empty reference row".to_string(),
            })?;
        values.push(parse_index(field, "true RUL", line_no)?);
    }

    debug!("parsed {} RUL reference values", values.len());
    Ok(values)
}

/// Load series records from a file path
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<CycleRecord>, IngestError> {
    parse_records(File::open(path)?)
}

/// Load positional RUL reference values from a file path
pub fn load_rul_values<P: AsRef<Path>>(path: P) -> Result<Vec<u32>, IngestError> {
    parse_rul_values(File::open(path)?)
}

fn parse_index(field: &str, name: &str, line_no: usize) -> Result<u32, IngestError> {
    field.parse::<u32>().map_err(|e| IngestError::MalformedRecord {
        line: line_no,
        reason: format!("{name}: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(unit: u32, cycle: u32, fill: f64) -> String {
        let channels: Vec<String> = (0..NUM_CHANNELS).map(|_| fill.to_string()).collect();
        format!("{} {} {}", unit, cycle, channels.join(" "))
    }

    #[test]
    fn test_parse_single_row() {
        let input = row(1, 1, 0.5);
        let records = parse_records(input.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].unit, 1);
        assert_eq!(records[0].cycle, 1);
        assert_eq!(records[0].channels[0], 0.5);
        assert_eq!(records[0].channels[23], 0.5);
    }

    #[test]
    fn test_trailing_whitespace_absorbed() {
        // Source rows end with trailing delimiters
        let input = format!("{}  \n", row(3, 7, 1.25));
        let records = parse_records(input.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].unit, 3);
        assert_eq!(records[0].cycle, 7);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let input = format!("{}\n\n{}\n", row(1, 1, 0.0), row(1, 2, 0.0));
        let records = parse_records(input.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_short_row_rejected() {
        let input = "1 1 2.5 3.5";
        let err = parse_records(input.as_bytes()).unwrap_err();
        match err {
            IngestError::MalformedRecord { line, reason } => {
                assert_eq!(line, 1);
                assert!(reason.contains("expected 26 fields"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_numeric_field_rejected() {
        let mut input = row(1, 1, 0.5);
        input = input.replace("0.5", "abc");
        let err = parse_records(input.as_bytes()).unwrap_err();
        assert!(matches!(err, IngestError::MalformedRecord { line: 1, .. }));
    }

    #[test]
    fn test_parse_rul_values_drops_trailing_column() {
        let input = "112 0\n98 0\n69 0\n";
        let values = parse_rul_values(input.as_bytes()).unwrap();
        assert_eq!(values, vec![112, 98, 69]);
    }

    #[test]
    fn test_parse_rul_values_non_numeric() {
        let input = "112\nx\n";
        let err = parse_rul_values(input.as_bytes()).unwrap_err();
        assert!(matches!(err, IngestError::MalformedRecord { line: 2, .. }));
    }
}
