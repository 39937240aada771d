use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Report {path} has an unexpected header: {found:?}")]
    InvalidHeader { path: String, found: String },

    #[error("No scan directory configured")]
    NoScanDirectories,

    #[error("Generic error: {0}")]
    Generic(String),
}
