//! CSV-backed record stores
//!
//! Each table lives in a single CSV file with a fixed header row. The whole
//! file is read into memory when a store is opened and rewritten from scratch
//! after every successful mutation.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{Result, StoreError};
use crate::domain::{same_name, ValidationError};

/// Row schema for one table
///
/// Implementors describe how a record maps onto a CSV row. The store itself
/// knows nothing about individual fields.
pub trait Record: Clone {
    /// Human-readable record kind used in messages ("Product", "Supplier")
    const KIND: &'static str;

    /// Header row, in the order fields are written
    const HEADER: &'static [&'static str];

    /// The record's key
    fn name(&self) -> &str;

    /// Checks the record's field invariants before it is stored
    fn validate(&self) -> std::result::Result<(), ValidationError>;

    /// Encodes the record as a row, one value per header column
    fn to_row(&self) -> Vec<String>;

    /// Decodes a row; the error is a reason suitable for display
    fn from_row(row: &csv::StringRecord) -> std::result::Result<Self, String>;
}

/// What to do when the table file does not exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MissingTable {
    /// Start with an empty table; the file is created on first save
    Empty,
    /// Refuse to open the store
    #[default]
    Fail,
}

/// In-memory table with full-file persistence
#[derive(Debug)]
pub struct RecordStore<R: Record> {
    path: PathBuf,
    records: Vec<R>,
}

impl<R: Record> RecordStore<R> {
    /// Opens the table at `path`, reading every row
    pub fn open(path: impl Into<PathBuf>, missing: MissingTable) -> Result<Self> {
        let path = path.into();

        let records = match File::open(&path) {
            Ok(file) => read_table::<R>(&path, file)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound && missing == MissingTable::Empty => {
                tracing::debug!(path = %path.display(), "table missing, starting empty");
                Vec::new()
            }
            Err(e) => return Err(StoreError::unavailable(&path, e)),
        };

        tracing::debug!(
            kind = R::KIND,
            path = %path.display(),
            count = records.len(),
            "loaded table"
        );

        Ok(Self { path, records })
    }

    /// Returns the path to the table file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records in the table
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrows the records in table order
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Copies the records in table order
    pub fn list_all(&self) -> Vec<R> {
        self.records.clone()
    }

    /// Finds the first record whose name matches, ignoring case
    pub fn find(&self, name: &str) -> Option<&R> {
        self.records.iter().find(|r| same_name(r.name(), name))
    }

    /// Like [`find`](Self::find), but a miss is an error
    pub fn get(&self, name: &str) -> Result<&R> {
        self.find(name).ok_or_else(|| not_found::<R>(name))
    }

    /// Appends a new record and saves the table
    pub fn add(&mut self, record: R) -> Result<()> {
        record.validate()?;

        if let Some(existing) = self.find(record.name()) {
            return Err(StoreError::DuplicateKey {
                kind: R::KIND,
                name: existing.name().to_string(),
            });
        }

        let mut next = self.records.clone();
        next.push(record);
        self.commit(next)
    }

    /// Replaces the record named `name`, keeping its position
    ///
    /// The replacement may carry a different name, as long as no other
    /// record already uses it.
    pub fn update(&mut self, name: &str, record: R) -> Result<()> {
        let index = self.position(name).ok_or_else(|| not_found::<R>(name))?;
        self.replace(index, record)
    }

    /// Applies `change` to a copy of the named record and stores the result
    ///
    /// With case-variant duplicates in the table, the first match is changed.
    /// Nothing is saved if `change` fails.
    pub fn modify<F>(&mut self, name: &str, change: F) -> Result<R>
    where
        F: FnOnce(&mut R) -> Result<()>,
    {
        let index = self.position(name).ok_or_else(|| not_found::<R>(name))?;
        let mut record = self.records[index].clone();
        change(&mut record)?;
        self.replace(index, record.clone())?;
        Ok(record)
    }

    /// Removes every record matching `name` and saves the table
    ///
    /// Returns the number of records removed.
    pub fn delete(&mut self, name: &str) -> Result<usize> {
        let next: Vec<R> = self
            .records
            .iter()
            .filter(|r| !same_name(r.name(), name))
            .cloned()
            .collect();

        let removed = self.records.len() - next.len();
        if removed == 0 {
            return Err(not_found::<R>(name));
        }

        self.commit(next)?;
        Ok(removed)
    }

    /// Rewrites the table file from the in-memory records
    pub fn persist(&self) -> Result<()> {
        write_table(&self.path, &self.records)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| same_name(r.name(), name))
    }

    /// Stores `record` at `index`; only a rename is checked for clashes
    fn replace(&mut self, index: usize, record: R) -> Result<()> {
        record.validate()?;

        let renamed = !same_name(self.records[index].name(), record.name());
        let clash = renamed
            && self
                .records
                .iter()
                .enumerate()
                .any(|(i, r)| i != index && same_name(r.name(), record.name()));
        if clash {
            return Err(StoreError::DuplicateKey {
                kind: R::KIND,
                name: record.name().to_string(),
            });
        }

        let mut next = self.records.clone();
        next[index] = record;
        self.commit(next)
    }

    /// Saves `next` and only then makes it the current state
    fn commit(&mut self, next: Vec<R>) -> Result<()> {
        write_table(&self.path, &next)?;
        self.records = next;
        Ok(())
    }
}

fn not_found<R: Record>(name: &str) -> StoreError {
    StoreError::NotFound {
        kind: R::KIND,
        name: name.to_string(),
    }
}

fn read_table<R: Record>(path: &Path, file: File) -> Result<Vec<R>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(file));

    let headers = reader
        .headers()
        .map_err(|e| csv_error(path, e))?
        .clone();

    // A zero-byte file has no header row; treat it like a header-only table
    if headers.is_empty() {
        return Ok(Vec::new());
    }

    let matches = headers.len() == R::HEADER.len()
        && headers.iter().zip(R::HEADER).all(|(h, expected)| h.trim() == *expected);
    if !matches {
        return Err(StoreError::Malformed {
            path: path.to_path_buf(),
            line: 1,
            reason: format!(
                "expected header '{}', found '{}'",
                R::HEADER.join(","),
                headers.iter().collect::<Vec<_>>().join(",")
            ),
        });
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| csv_error(path, e))?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        let record = R::from_row(&row).map_err(|reason| StoreError::Malformed {
            path: path.to_path_buf(),
            line,
            reason,
        })?;
        records.push(record);
    }

    Ok(records)
}

fn write_table<R: Record>(path: &Path, records: &[R]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| StoreError::unavailable(parent, e))?;
        }
    }

    // Truncates in place; a crash mid-write leaves a partial table
    let file = File::create(path).map_err(|e| StoreError::unavailable(path, e))?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));

    writer
        .write_record(R::HEADER)
        .map_err(|e| StoreError::unavailable(path, e.into()))?;
    for record in records {
        writer
            .write_record(record.to_row())
            .map_err(|e| StoreError::unavailable(path, e.into()))?;
    }
    writer
        .flush()
        .map_err(|e| StoreError::unavailable(path, e))?;

    tracing::debug!(
        kind = R::KIND,
        path = %path.display(),
        count = records.len(),
        "saved table"
    );

    Ok(())
}

fn csv_error(path: &Path, err: csv::Error) -> StoreError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    let reason = err.to_string();

    if err.is_io_error() {
        if let csv::ErrorKind::Io(source) = err.into_kind() {
            return StoreError::unavailable(path, source);
        }
    }

    StoreError::Malformed {
        path: path.to_path_buf(),
        line,
        reason,
    }
}
