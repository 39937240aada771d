use crate::error::AppError;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists the files directly inside `directory` whose extension is in
/// `allowed_extensions` (lowercase, no dot), sorted by file name.
pub fn list_images(
    directory: &Path,
    allowed_extensions: &HashSet<String>,
) -> Result<Vec<PathBuf>, AppError> {
    log::info!("Starting file discovery in {}", directory.display());
    log::debug!("Configured allowed extensions: {:?}", allowed_extensions);

    if !directory.is_dir() {
        return Err(AppError::Generic(format!(
            "{} is not a directory",
            directory.display()
        )));
    }

    let mut images = Vec::new();
    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry in {}: {}", directory.display(), e);
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file() {
            log::trace!("Skipping non-file entry: {:?}", path);
            continue;
        }

        log::trace!("Discovered file: {:?}", path);
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if allowed_extensions.contains(&ext.to_lowercase()) => {
                log::debug!("Queueing image file: {:?}", path);
                images.push(path.to_path_buf());
            }
            Some(_) => log::trace!("Skipping file due to unsupported extension: {:?}", path),
            None => log::trace!("Skipping file with no extension: {:?}", path),
        }
    }

    log::info!(
        "File discovery complete: {} matching files in {}",
        images.len(),
        directory.display()
    );
    Ok(images)
}
