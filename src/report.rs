//! CSV report output.
//!
//! The header is written once, when the report is created or truncated. Rows
//! are appended one at a time, each through its own file handle.

use crate::error::AppError;
use crate::metadata::{ImageMetadataRecord, REPORT_HEADER};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct ReportWriter {
    path: PathBuf,
    missing_value: String,
}

impl ReportWriter {
    /// Makes `path` ready for appending rows.
    ///
    /// A new, empty or `overwrite`-requested report is (re)created with the
    /// header. An existing report is kept as long as its first line is the
    /// expected header, so reruns never duplicate it.
    pub fn prepare(
        path: impl Into<PathBuf>,
        missing_value: impl Into<String>,
        overwrite: bool,
    ) -> Result<Self, AppError> {
        let writer = Self {
            path: path.into(),
            missing_value: missing_value.into(),
        };

        let existing_len = match fs::metadata(&writer.path) {
            Ok(meta) => Some(meta.len()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        match existing_len {
            Some(len) if len > 0 && !overwrite => {
                writer.check_header()?;
                log::info!("Appending to existing report {}", writer.path.display());
            }
            _ => {
                writer.write_header()?;
                log::info!("Created report {}", writer.path.display());
            }
        }

        Ok(writer)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, record: &ImageMetadataRecord) -> Result<(), AppError> {
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut csv = csv_writer(file);
        csv.write_record(record.to_row(&self.missing_value))?;
        csv.flush()?;
        log::trace!("Appended row for {} to {}", record.filename, self.path.display());
        Ok(())
    }

    fn write_header(&self) -> Result<(), AppError> {
        let file = File::create(&self.path)?;
        let mut csv = csv_writer(file);
        csv.write_record(REPORT_HEADER)?;
        csv.flush()?;
        Ok(())
    }

    fn check_header(&self) -> Result<(), AppError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;
        let first = reader.records().next().transpose()?.unwrap_or_default();
        if !first.iter().eq(REPORT_HEADER) {
            return Err(AppError::InvalidHeader {
                path: self.path.display().to_string(),
                found: first.iter().collect::<Vec<_>>().join(","),
            });
        }
        Ok(())
    }
}

fn csv_writer(file: File) -> csv::Writer<File> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(file)
}
