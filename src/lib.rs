//! Scans image directories, extracts EXIF capture metadata (time,
//! resolution, GPS position) and appends one CSV row per image.

pub mod cli;
pub mod config;
pub mod coordinates;
pub mod error;
pub mod metadata;
pub mod processor;
pub mod report;
pub mod walker;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::processor::FileOutcome;
use crate::report::ReportWriter;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub skipped: usize,
}

/// Processes every matching file in the configured directories, one at a
/// time. Unreadable files and directories are logged and skipped; only a
/// failure to write the report aborts the run.
pub fn run(config: &AppConfig) -> Result<RunSummary, AppError> {
    let report = ReportWriter::prepare(
        &config.output_path,
        config.missing_value.as_str(),
        config.overwrite,
    )?;
    let mut summary = RunSummary::default();

    for directory in &config.scan_directories {
        let images = match walker::list_images(directory, &config.allowed_extensions) {
            Ok(images) => images,
            Err(e) => {
                log::warn!("Skipping directory {}: {}", directory.display(), e);
                continue;
            }
        };

        for path in images {
            match processor::process_file(&path) {
                FileOutcome::Processed(record) => {
                    report.append(&record)?;
                    summary.processed += 1;
                }
                FileOutcome::Skipped { filename, reason } => {
                    log::warn!("Unable to load {}: {}", filename, reason);
                    summary.skipped += 1;
                }
            }
        }
    }

    log::info!(
        "Wrote {} rows to {} ({} files skipped)",
        summary.processed,
        report.path().display(),
        summary.skipped
    );
    Ok(summary)
}
