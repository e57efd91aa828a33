// src/store.rs
//
// In-memory dataset + the report loader (CSV/TSV or workbook) and exporter.
// A `DataSet` is never edited after load; filtering hands out a new one.

use std::{fs, io, path::{Path, PathBuf}};

use thiserror::Error;

use crate::config::options::{InputFormat, LoadOptions};
use crate::core::csv::{parse_rows, rows_to_string, Delim};
use crate::core::sanitize::clean_cell;
use crate::core::xlsx;
use crate::engine::table::{TableRow, TABLE_HEADERS};
use crate::model::{Cell, RawRow, COLUMN_COUNT};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    /// Report labels, for display only. Columns are read by position.
    pub headers: Option<Vec<String>>,
    pub rows: Vec<RawRow>,
}

impl DataSet {
    pub fn new(rows: Vec<RawRow>) -> Self {
        Self { headers: None, rows }
    }

    pub fn with_headers(headers: Vec<String>, rows: Vec<RawRow>) -> Self {
        Self { headers: Some(headers), rows }
    }

    #[inline] pub fn len(&self) -> usize { self.rows.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    /// Derived copy holding only the rows `keep` accepts.
    pub fn filtered<F>(&self, keep: F) -> DataSet
    where
        F: Fn(&RawRow) -> bool,
    {
        DataSet {
            headers: self.headers.clone(),
            rows: self.rows.iter().filter(|r| keep(r)).cloned().collect(),
        }
    }
}

/// What the loader saw, for the log and the status line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub rows: usize,
    /// Rows with fewer than 22 cells; kept, but they degrade downstream.
    pub short_rows: usize,
    pub widest: usize,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no input file configured")]
    NoInput,

    #[error("cannot read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("cannot read workbook {}: {source}", .path.display())]
    Workbook { path: PathBuf, source: calamine::Error },

    /// Also what empty input produces.
    #[error("header row {header_row} not found (input has {lines} non-blank lines)")]
    NoHeaderRow { header_row: usize, lines: usize },
}

/// Parse report text. Lines before `header_row` are dropped, the header
/// line becomes display labels, everything after is data.
pub fn parse_dataset(
    text: &str,
    delim: Delim,
    header_row: usize,
) -> Result<(DataSet, LoadReport), LoadError> {
    let lines = parse_rows(text, delim.sep())
        .into_iter()
        .map(|line| line.iter().map(|c| clean_cell(c)).collect())
        .collect();
    build_dataset(lines, header_row)
}

/// Split already-cleaned rows into labels and data. Shared by the text and
/// workbook readers; blank rows are gone before `header_row` is counted.
pub fn build_dataset(
    mut lines: Vec<Vec<Cell>>,
    header_row: usize,
) -> Result<(DataSet, LoadReport), LoadError> {
    if lines.len() <= header_row {
        return Err(LoadError::NoHeaderRow { header_row, lines: lines.len() });
    }

    let data = lines.split_off(header_row + 1);
    let headers: Vec<String> = lines
        .pop()
        .unwrap_or_default()
        .into_iter()
        .map(|h| h.unwrap_or_default())
        .collect();

    let mut report = LoadReport::default();
    let rows: Vec<RawRow> = data
        .into_iter()
        .map(|cells| {
            let row = RawRow::new(cells);
            report.widest = report.widest.max(row.len());
            if !row.is_complete() {
                report.short_rows += 1;
            }
            row
        })
        .collect();
    report.rows = rows.len();

    Ok((DataSet::with_headers(headers, rows), report))
}

pub fn load_dataset(opts: &LoadOptions) -> Result<(DataSet, LoadReport), LoadError> {
    let path = opts.path.as_deref().ok_or(LoadError::NoInput)?;

    let format = opts.input_format();
    let (ds, report) = match format {
        InputFormat::Workbook => {
            let lines = xlsx::read_first_sheet(path)
                .map_err(|source| LoadError::Workbook { path: path.to_path_buf(), source })?;
            build_dataset(lines, opts.header_row)?
        }
        InputFormat::Delimited(delim) => {
            let text = fs::read_to_string(path)
                .map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
            parse_dataset(&text, delim, opts.header_row)?
        }
    };

    logf!(
        "Load: {} ({:?}) → rows={}, widest={}, headers={}",
        path.display(),
        format,
        report.rows,
        report.widest,
        ds.headers.as_ref().map(|h| h.len()).unwrap_or(0)
    );
    if report.short_rows > 0 {
        logw!(
            "Load: {} row(s) have fewer than {} cells; they will be skipped where a position is required",
            report.short_rows,
            COLUMN_COUNT
        );
    }
    Ok((ds, report))
}

/* ---------------- Export ---------------- */

/// Table projection → delimited text with the six display headers.
pub fn table_to_string(rows: &[TableRow], delim: Delim) -> String {
    let cells: Vec<Vec<String>> = rows.iter().map(TableRow::to_cells).collect();
    rows_to_string(Some(&TABLE_HEADERS[..]), &cells, delim.sep())
}

/// Write the table projection to `path`, creating parent dirs.
pub fn export_table(path: &Path, rows: &[TableRow], delim: Delim) -> io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, table_to_string(rows, delim))?;
    logf!("Export: {} rows → {}", rows.len(), path.display());
    Ok(path.to_path_buf())
}
