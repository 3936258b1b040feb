//! Text parsing for ezFCF report output.
//!
//! Finds the parallel approximation section, the integer column header that
//! follows it, and decodes the whitespace-separated matrix rows beneath the
//! header into a [`SquareMatrix`].
//!
//! Rows are placed by their own leading index while the matrix size comes from
//! the header labels. A report whose rows are out of order lands correctly, but
//! one with a repeated row index silently overwrites the earlier row and leaves
//! the skipped row at zero. A negative row index counts back from the last row
//! (`-1` is row `n - 1`), so `-1` and `n - 1` in one block also collide silently.

use crate::config::ParseConfig;
use crate::matrix::SquareMatrix;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportParseError {
    #[error("marker line not found: {marker:?}")]
    MarkerNotFound { marker: String },
    #[error("column index header not found after marker on line {marker_line}")]
    HeaderNotFound { marker_line: usize },
    #[error(
        "matrix truncated: expected {expected} rows after header on line {header_line}, found {found}"
    )]
    TruncatedMatrix {
        header_line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: invalid row index {token:?}")]
    InvalidRowIndex { line: usize, token: String },
    #[error("line {line}: row index {row} outside {n}x{n} matrix")]
    RowIndexOutOfRange { line: usize, row: i64, n: usize },
    #[error("line {line}: expected {expected} values after the row index, found {found}")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}, column {column}: invalid value {token:?}")]
    InvalidValue {
        line: usize,
        column: usize,
        token: String,
    },
}

/// Where the matrix block sits inside the report. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLayout {
    pub marker_line: usize,
    pub header_line: usize,
    pub labels: Vec<i64>,
    pub n: usize,
}

/// Index of the first line containing `marker`.
pub fn find_marker(lines: &[&str], marker: &str) -> Result<usize, ReportParseError> {
    lines
        .iter()
        .position(|line| line.contains(marker))
        .ok_or_else(|| ReportParseError::MarkerNotFound {
            marker: marker.to_string(),
        })
}

/// Parse a candidate header line.
///
/// Returns the labels when every token is an integer and the first one is `0`.
pub fn parse_header_labels(line: &str) -> Option<Vec<i64>> {
    let labels = line
        .split_whitespace()
        .map(|token| token.parse::<i64>().ok())
        .collect::<Option<Vec<_>>>()?;
    match labels.first() {
        Some(0) => Some(labels),
        _ => None,
    }
}

/// First header line at or after index `start`, with its labels.
pub fn find_header(lines: &[&str], start: usize) -> Result<(usize, Vec<i64>), ReportParseError> {
    lines
        .iter()
        .enumerate()
        .skip(start)
        .find_map(|(idx, line)| parse_header_labels(line).map(|labels| (idx, labels)))
        .ok_or(ReportParseError::HeaderNotFound {
            marker_line: start + 1,
        })
}

pub fn locate(lines: &[&str], config: &ParseConfig) -> Result<ReportLayout, ReportParseError> {
    let marker_idx = find_marker(lines, &config.marker)?;
    let (header_idx, labels) = find_header(lines, marker_idx)?;
    let max_label = labels.iter().copied().max().unwrap_or(0);
    let n = usize::try_from(max_label)
        .unwrap_or(usize::MAX)
        .saturating_add(1);

    debug!(
        marker_line = marker_idx + 1,
        header_line = header_idx + 1,
        n,
        "located matrix block"
    );

    Ok(ReportLayout {
        marker_line: marker_idx + 1,
        header_line: header_idx + 1,
        labels,
        n,
    })
}

/// Decode the `layout.n` lines that follow the header.
pub fn parse_matrix(
    lines: &[&str],
    layout: &ReportLayout,
    config: &ParseConfig,
) -> Result<SquareMatrix, ReportParseError> {
    let n = layout.n;
    // The 1-based header line number is also the index of the first data row.
    let first = layout.header_line;
    let found = lines.len().saturating_sub(first);
    if found < n {
        return Err(ReportParseError::TruncatedMatrix {
            header_line: layout.header_line,
            expected: n,
            found,
        });
    }

    // Decode every row before allocating: n*n cells are only requested once
    // the file has shown it actually holds n rows of n values.
    let mut rows = Vec::with_capacity(n);
    for (offset, raw) in lines[first..first + n].iter().enumerate() {
        let line = first + offset + 1;
        let mut tokens = raw.split_whitespace();
        let row = parse_row_index(tokens.next(), line, n)?;

        let values: Vec<&str> = tokens.collect();
        if values.len() != n {
            return Err(ReportParseError::ColumnCount {
                line,
                expected: n,
                found: values.len(),
            });
        }

        let values = values
            .into_iter()
            .enumerate()
            .map(|(column, token)| parse_value(token, &config.missing_token, line, column))
            .collect::<Result<Vec<f64>, _>>()?;
        rows.push((row, values));
    }

    let mut matrix = SquareMatrix::zeros(n);
    for (row, values) in rows {
        for (column, value) in values.into_iter().enumerate() {
            matrix.set(row, column, value);
        }
    }

    Ok(matrix)
}

/// Locate and decode the matrix block of a whole report.
pub fn read_mode_matrix(
    text: &str,
    config: &ParseConfig,
) -> Result<(ReportLayout, SquareMatrix), ReportParseError> {
    let lines: Vec<&str> = text.lines().collect();
    let layout = locate(&lines, config)?;
    let matrix = parse_matrix(&lines, &layout, config)?;
    Ok((layout, matrix))
}

/// Negative indices count back from the last row, so `-1` lands on row `n - 1`.
fn parse_row_index(token: Option<&str>, line: usize, n: usize) -> Result<usize, ReportParseError> {
    let token = token.unwrap_or("");
    let row = token
        .parse::<i64>()
        .map_err(|_| ReportParseError::InvalidRowIndex {
            line,
            token: token.to_string(),
        })?;
    let resolved = if row < 0 {
        usize::try_from(row.unsigned_abs())
            .ok()
            .and_then(|back| n.checked_sub(back))
    } else {
        usize::try_from(row).ok().filter(|&r| r < n)
    };
    resolved.ok_or(ReportParseError::RowIndexOutOfRange { line, row, n })
}

fn parse_value(
    token: &str,
    missing_token: &str,
    line: usize,
    column: usize,
) -> Result<f64, ReportParseError> {
    if token == missing_token {
        return Ok(0.0);
    }
    token
        .parse::<f64>()
        .map_err(|_| ReportParseError::InvalidValue {
            line,
            column,
            token: token.to_string(),
        })
}
