// src/metadata.rs

use std::fmt;

pub const REPORT_HEADER: [&str; 7] = [
    "FILENAME",
    "RESOLUTION",
    "TIMESTAMP",
    "DATESTAMP",
    "ALTITUDE",
    "LATITUDE",
    "LONGITUDE",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Capture metadata for a single image; one report row.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageMetadataRecord {
    pub filename: String,
    pub resolution: Option<Resolution>,
    pub timestamp: Option<String>,
    pub datestamp: Option<String>,
    /// Meters, negative below sea level.
    pub altitude: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl ImageMetadataRecord {
    /// A record with every extracted field absent.
    pub fn empty(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            resolution: None,
            timestamp: None,
            datestamp: None,
            altitude: None,
            latitude: None,
            longitude: None,
        }
    }

    pub fn has_gps(&self) -> bool {
        self.altitude.is_some() || self.latitude.is_some() || self.longitude.is_some()
    }

    /// Renders the record in header order, writing `missing` for absent fields.
    pub fn to_row(&self, missing: &str) -> [String; 7] {
        [
            self.filename.clone(),
            render(self.resolution.as_ref(), missing),
            render(self.timestamp.as_ref(), missing),
            render(self.datestamp.as_ref(), missing),
            render(self.altitude.as_ref(), missing),
            render(self.latitude.as_ref(), missing),
            render(self.longitude.as_ref(), missing),
        ]
    }
}

fn render<T: fmt::Display>(value: Option<&T>, missing: &str) -> String {
    value.map_or_else(|| missing.to_string(), ToString::to_string)
}
