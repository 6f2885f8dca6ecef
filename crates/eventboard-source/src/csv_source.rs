//! CSV file source.
//!
//! Reads a UTF-8 CSV export whose first line is the header. A leading byte
//! order mark is ignored and header names are trimmed. Rows may be shorter
//! than the header; missing cells read as empty strings.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use ::csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::columns::ColumnNames;
use crate::error::{SourceError, SourceResult};
use crate::raw_row::RawRow;
use crate::source::RecordSource;

const SOURCE_NAME: &str = "csv";

/// A [`RecordSource`] backed by a CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    columns: ColumnNames,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            columns: ColumnNames::default(),
        }
    }

    /// Builder method to read fields from differently named headers.
    pub fn with_columns(mut self, columns: ColumnNames) -> Self {
        self.columns = columns;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn columns(&self) -> &ColumnNames {
        &self.columns
    }
}

impl RecordSource for CsvSource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch_rows(&self) -> SourceResult<Vec<RawRow>> {
        let file = File::open(&self.path).map_err(|e| open_error(&self.path, e))?;
        debug!(path = %self.path.display(), "Reading CSV source");
        read_rows(file, &self.columns).map_err(|e| e.with_source_name(SOURCE_NAME))
    }
}

fn open_error(path: &Path, err: io::Error) -> SourceError {
    let error = if err.kind() == io::ErrorKind::NotFound {
        SourceError::missing(format!("{} does not exist", path.display()))
    } else {
        SourceError::unreadable(format!("cannot open {}", path.display()))
    };
    error.with_source_name(SOURCE_NAME).with_source(err)
}

fn csv_error(err: ::csv::Error) -> SourceError {
    SourceError::unreadable(format!("malformed CSV: {}", err)).with_source(err)
}

/// Parses CSV text into raw rows.
///
/// Input without any header line is an empty table, not an error.
///
/// # Errors
///
/// Returns `SourceError` with code `Unreadable` for invalid UTF-8, broken
/// CSV structure or a missing required column, and `Configuration` for
/// invalid column names.
pub fn read_rows<R: Read>(input: R, columns: &ColumnNames) -> SourceResult<Vec<RawRow>> {
    columns.validate()?;

    let mut reader = ReaderBuilder::new().flexible(true).from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(clean_header)
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        debug!("CSV input has no header line");
        return Ok(Vec::new());
    }

    let layout = ColumnLayout::resolve(&headers, columns)?;

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(csv_error)?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(idx as u64 + 2);
        rows.push(layout.row(line, &record));
    }

    Ok(rows)
}

fn clean_header(raw: &str) -> String {
    // BOM
    raw.trim_start_matches('\u{feff}').trim().to_string()
}

/// Column indexes of the required fields plus the remaining headers.
struct ColumnLayout {
    title: usize,
    organizer_name: usize,
    organizer_id: usize,
    start_date: usize,
    end_date: usize,
    link: usize,
    extra: Vec<(usize, String)>,
}

impl ColumnLayout {
    fn resolve(headers: &[String], columns: &ColumnNames) -> SourceResult<Self> {
        let missing: Vec<&str> = columns
            .required()
            .into_iter()
            .filter(|name| !headers.iter().any(|h| h == name))
            .collect();
        if !missing.is_empty() {
            return Err(SourceError::unreadable(format!(
                "missing required column(s): {}",
                missing.join(", ")
            )));
        }

        let index_of = |name: &str| headers.iter().position(|h| h == name).unwrap_or(0);

        let extra = headers
            .iter()
            .enumerate()
            .filter(|(_, h)| !h.is_empty() && !columns.is_required(h))
            .map(|(i, h)| (i, h.clone()))
            .collect();

        Ok(Self {
            title: index_of(&columns.title),
            organizer_name: index_of(&columns.organizer_name),
            organizer_id: index_of(&columns.organizer_id),
            start_date: index_of(&columns.start_date),
            end_date: index_of(&columns.end_date),
            link: index_of(&columns.link),
            extra,
        })
    }

    fn row(&self, line: u64, record: &StringRecord) -> RawRow {
        let cell = |idx: usize| record.get(idx).unwrap_or("").to_string();

        RawRow {
            line,
            title: cell(self.title),
            organizer_name: cell(self.organizer_name),
            organizer_id: cell(self.organizer_id),
            start_date: cell(self.start_date),
            end_date: cell(self.end_date),
            link: cell(self.link),
            extra: self
                .extra
                .iter()
                .map(|(idx, header)| (header.clone(), cell(*idx)))
                .collect(),
        }
    }
}
