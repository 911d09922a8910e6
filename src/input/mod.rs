//! Credential CSV input
//!
//! Columns are looked up by header name. All configured columns are
//! resolved against the header row before the first record is read, so a
//! misnamed column stops the run before any app is created.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{InputError, Result};

/// Header names of the three credential columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    pub name: String,
    pub url: String,
    pub password: String,
}

impl Default for ColumnNames {
    // The password column defaults to the URL column's header.
    fn default() -> Self {
        Self {
            name: "Name".to_string(),
            url: "admin".to_string(),
            password: "admin".to_string(),
        }
    }
}

/// One line of the credential CSV
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRow {
    /// Merchant name, used as the app label
    pub name: String,
    pub admin_url: String,
    pub password: String,
}

/// A resolved column: its header name and position
#[derive(Debug, Clone)]
struct Column {
    name: String,
    index: usize,
}

/// Streaming reader over credential rows
pub struct CredentialReader<R: Read> {
    reader: csv::Reader<R>,
    columns: [Column; 3],
}

impl CredentialReader<File> {
    /// Open a credential CSV file and resolve its columns
    pub fn open(path: &Path, columns: &ColumnNames) -> Result<Self> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(|source| InputError::Open {
                path: path.display().to_string(),
                source,
            })?;
        Self::with_reader(reader, columns)
    }
}

impl<R: Read> CredentialReader<R> {
    /// Wrap any reader producing CSV text
    #[allow(dead_code)]
    pub fn from_reader(rdr: R, columns: &ColumnNames) -> Result<Self> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(rdr);
        Self::with_reader(reader, columns)
    }

    fn with_reader(mut reader: csv::Reader<R>, columns: &ColumnNames) -> Result<Self> {
        let headers = reader.headers().map_err(InputError::from)?.clone();

        let columns = [
            resolve_column(&headers, &columns.name)?,
            resolve_column(&headers, &columns.url)?,
            resolve_column(&headers, &columns.password)?,
        ];

        Ok(Self { reader, columns })
    }

    /// Iterate over rows.
    ///
    /// Fields beyond the header row are ignored. A record too short to hold
    /// one of the configured columns yields an error.
    pub fn rows(&mut self) -> impl Iterator<Item = Result<CredentialRow>> + '_ {
        let [name, url, password] = &self.columns;
        self.reader.records().map(move |record| -> Result<CredentialRow> {
            let record = record.map_err(InputError::from)?;
            Ok(CredentialRow {
                name: field(&record, name)?,
                admin_url: field(&record, url)?,
                password: field(&record, password)?,
            })
        })
    }
}

// When a header repeats, the last occurrence wins.
fn resolve_column(headers: &csv::StringRecord, column: &str) -> Result<Column> {
    let index = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| *h == column)
        .map(|(i, _)| i)
        .last();

    match index {
        Some(index) => Ok(Column {
            name: column.to_string(),
            index,
        }),
        None => Err(InputError::MissingColumn {
            column: column.to_string(),
            available: headers.iter().collect::<Vec<_>>().join(", "),
        }
        .into()),
    }
}

fn field(record: &csv::StringRecord, column: &Column) -> Result<String> {
    match record.get(column.index) {
        Some(value) => Ok(value.to_string()),
        None => {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            Err(InputError::MissingColumn {
                column: column.name.clone(),
                available: format!("{} fields on line {}", record.len(), line),
            }
            .into())
        }
    }
}
