//! Result file output
//!
//! One line per created app, no header: `name,admin_url,password,application_id`.
//! Each line is flushed as soon as it is written, so an aborted run still
//! leaves a record of every app created before the failure.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::input::CredentialRow;

pub mod summary;

pub use summary::ProvisionSummary;

/// Appends result lines for created apps
pub struct ResultWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl ResultWriter<File> {
    /// Create or truncate the results file
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::from_writer(file))
    }
}

impl<W: Write> ResultWriter<W> {
    pub fn from_writer(writer: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .quote_style(csv::QuoteStyle::Necessary)
            .from_writer(writer);
        Self { writer }
    }

    /// Write one line for a created app
    pub fn record(&mut self, row: &CredentialRow, application_id: &str) -> Result<()> {
        self.writer
            .write_record([
                row.name.as_str(),
                row.admin_url.as_str(),
                row.password.as_str(),
                application_id,
            ])
            .map_err(crate::error::InputError::from)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and hand back the underlying writer
    #[allow(dead_code)]
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| e.into_error().into())
    }
}
