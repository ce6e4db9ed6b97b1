//! Plain comma-separated dataset files.
//!
//! Format:
//! - one row per line, fields separated by `,`
//! - numbers in Rust's default `f64` formatting on write; anything
//!   `str::parse::<f64>` accepts on read
//! - no header, no quoting; blank lines are skipped
//! - the caller says how many leading fields are inputs

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::data::dataset::Dataset;
use crate::error::{HarnessError, Result};

/// Writes every row of `dataset` to `w`.
pub fn write_rows<W: Write>(w: &mut W, dataset: &Dataset) -> Result<()> {
    for row in &dataset.rows {
        let line = row.iter().map(f64::to_string).collect::<Vec<_>>().join(",");
        writeln!(w, "{line}")?;
    }
    Ok(())
}

/// Creates (or truncates) `path` and writes `dataset` to it.
pub fn write_dataset(path: &Path, dataset: &Dataset) -> Result<()> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);
    write_rows(&mut w, dataset)?;
    w.flush()?;
    Ok(())
}

/// Parses rows from `reader`. Every row must have the same width, and that
/// width must exceed `input_count`.
pub fn read_rows<R: BufRead>(reader: R, input_count: usize) -> Result<Dataset> {
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let row = parse_floats(line, line_no)?;
        if row.len() <= input_count {
            return Err(HarnessError::Parse {
                line: line_no,
                message: format!(
                    "expected more than {input_count} fields (inputs + output), got {}",
                    row.len()
                ),
            });
        }
        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(HarnessError::Parse {
                    line: line_no,
                    message: format!(
                        "field count {} does not match first row's {}",
                        row.len(),
                        first.len()
                    ),
                });
            }
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(HarnessError::EmptyDataset);
    }
    Ok(Dataset::new(input_count, rows))
}

/// Opens `path` and parses it with `read_rows`.
pub fn read_dataset(path: &Path, input_count: usize) -> Result<Dataset> {
    let file = File::open(path)?;
    read_rows(BufReader::new(file), input_count)
}

fn parse_floats(line: &str, line_no: usize) -> Result<Vec<f64>> {
    line.split(',')
        .map(|cell| {
            cell.trim().parse::<f64>().map_err(|_| HarnessError::Parse {
                line: line_no,
                message: format!("'{}' is not a valid number", cell.trim()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::sin_cos;
    use std::io::Cursor;

    #[test]
    fn written_rows_read_back_identically() {
        let ds = sin_cos(25).unwrap().inject_column(1, || 0.25).unwrap();
        let mut buf = Vec::new();
        write_rows(&mut buf, &ds).unwrap();
        let back = read_rows(Cursor::new(buf), 2).unwrap();
        assert_eq!(back, ds);
    }

    #[test]
    fn zero_column_is_written_as_literal_zero() {
        let ds = sin_cos(2).unwrap().inject_column(1, || 0.0).unwrap();
        let mut buf = Vec::new();
        write_rows(&mut buf, &ds).unwrap();
        let text = String::from_utf8(buf).unwrap();
        for line in text.lines() {
            assert_eq!(line.split(',').nth(1), Some("0"));
        }
    }

    #[test]
    fn bad_number_reports_line() {
        let err = read_rows(Cursor::new("0,1\n0.5,abc\n"), 1).unwrap_err();
        assert!(matches!(err, HarnessError::Parse { line: 2, .. }), "{err}");
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = read_rows(Cursor::new("0,1\n0.5,0.2,0.3\n"), 1).unwrap_err();
        assert!(matches!(err, HarnessError::Parse { line: 2, .. }));
    }

    #[test]
    fn blank_input_is_empty_dataset() {
        let err = read_rows(Cursor::new("\n\n"), 1).unwrap_err();
        assert!(matches!(err, HarnessError::EmptyDataset));
    }
}
