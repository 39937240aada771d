use crate::coordinates::dms_to_decimal;
use crate::error::AppError;
use crate::metadata::{ImageMetadataRecord, Resolution};
use exif::{Exif, In, Rational, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Result of handling one enumerated file.
#[derive(Debug)]
pub enum FileOutcome {
    /// The image decoded; fields missing from its EXIF data are `None`.
    Processed(ImageMetadataRecord),
    /// The file could not be opened or decoded and produces no row.
    Skipped { filename: String, reason: AppError },
}

pub fn process_file(path: &Path) -> FileOutcome {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());

    log::info!("Processing image started for: {:?}", path);
    match read_metadata(path, &filename) {
        Ok(record) => {
            log::trace!("Extracted metadata for {:?}: {:?}", path, record);
            log::info!("Processing image finished for: {:?}", path);
            FileOutcome::Processed(record)
        }
        Err(reason) => FileOutcome::Skipped { filename, reason },
    }
}

fn read_metadata(path: &Path, filename: &str) -> Result<ImageMetadataRecord, AppError> {
    log::trace!("Decoding image header for: {:?}", path);
    let (width, height) = image::io::Reader::open(path)?
        .with_guessed_format()?
        .into_dimensions()?;
    log::debug!("Dimensions for {:?}: {}x{}", path, width, height);

    log::trace!("Extracting EXIF data for image: {:?}", path);
    let mut buf_reader = BufReader::new(File::open(path)?);
    let exif = match Reader::new().read_from_container(&mut buf_reader) {
        Ok(exif) => exif,
        Err(exif::Error::NotFound(_)) => {
            log::debug!("No EXIF data found for {:?}", path);
            return Ok(ImageMetadataRecord::empty(filename));
        }
        Err(e) => {
            log::warn!("Ignoring unreadable EXIF data in {:?}: {}", path, e);
            return Ok(ImageMetadataRecord::empty(filename));
        }
    };

    Ok(extract(&exif, filename, Some(Resolution { width, height })))
}

/// Builds a record from an EXIF tag table.
///
/// An empty table yields a record with every field absent. Otherwise each
/// field is derived on its own, so a missing or malformed tag only blanks
/// the field that depends on it. `decoded` is used as the resolution when
/// the EXIF pixel dimension tags are missing.
pub fn extract(exif: &Exif, filename: &str, decoded: Option<Resolution>) -> ImageMetadataRecord {
    let mut record = ImageMetadataRecord::empty(filename);
    if exif.fields().next().is_none() {
        log::debug!("Empty EXIF table for {}", filename);
        return record;
    }

    record.resolution = exif_resolution(exif).or(decoded);

    match ascii(exif, Tag::DateTimeOriginal) {
        Some(datetime) => {
            let (date, time) = split_datetime(&datetime);
            record.datestamp = date;
            record.timestamp = time;
        }
        None => log::debug!("{} has no DateTimeOriginal", filename),
    }

    record.altitude = altitude(exif);
    record.latitude = coordinate(exif, Tag::GPSLatitude, Tag::GPSLatitudeRef);
    record.longitude = coordinate(exif, Tag::GPSLongitude, Tag::GPSLongitudeRef);
    if !record.has_gps() {
        log::debug!("{} has no usable GPS data", filename);
    }

    record
}

fn exif_resolution(exif: &Exif) -> Option<Resolution> {
    let width = uint(exif, Tag::PixelXDimension)?;
    let height = uint(exif, Tag::PixelYDimension)?;
    Some(Resolution { width, height })
}

/// Splits `"YYYY:MM:DD HH:MM:SS"` into its date and time parts.
fn split_datetime(datetime: &str) -> (Option<String>, Option<String>) {
    let datetime = datetime.trim();
    if datetime.is_empty() {
        return (None, None);
    }
    match datetime.split_once(char::is_whitespace) {
        Some((date, time)) => {
            let time = time.trim();
            (
                Some(date.to_string()),
                (!time.is_empty()).then(|| time.to_string()),
            )
        }
        None => (Some(datetime.to_string()), None),
    }
}

fn altitude(exif: &Exif) -> Option<f64> {
    let meters = rational_to_f64(rationals(exif, Tag::GPSAltitude)?.first()?)?;
    // GPSAltitudeRef 1 means below sea level.
    if meters != 0.0 && uint(exif, Tag::GPSAltitudeRef) == Some(1) {
        Some(-meters)
    } else {
        Some(meters)
    }
}

fn coordinate(exif: &Exif, value_tag: Tag, ref_tag: Tag) -> Option<f64> {
    let dms = rationals(exif, value_tag)?;
    if dms.len() != 3 {
        log::debug!("{} has {} components, expected 3", value_tag, dms.len());
        return None;
    }
    let degrees = rational_to_f64(&dms[0])?;
    let minutes = rational_to_f64(&dms[1])?;
    let seconds = rational_to_f64(&dms[2])?;
    let reference = ascii(exif, ref_tag)?;
    Some(dms_to_decimal(degrees, minutes, seconds, &reference))
}

fn rational_to_f64(value: &Rational) -> Option<f64> {
    if value.denom == 0 {
        None
    } else {
        Some(value.to_f64())
    }
}

fn rationals(exif: &Exif, tag: Tag) -> Option<&[Rational]> {
    match &exif.get_field(tag, In::PRIMARY)?.value {
        Value::Rational(values) => Some(values.as_slice()),
        _ => None,
    }
}

fn ascii(exif: &Exif, tag: Tag) -> Option<String> {
    match &exif.get_field(tag, In::PRIMARY)?.value {
        Value::Ascii(parts) => parts
            .first()
            .map(|bytes| String::from_utf8_lossy(bytes).trim_matches('\0').trim().to_string()),
        _ => None,
    }
}

fn uint(exif: &Exif, tag: Tag) -> Option<u32> {
    exif.get_field(tag, In::PRIMARY)?.value.get_uint(0)
}
