use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Extract capture time, resolution and GPS position from image EXIF data into a CSV report"
)]
pub struct Args {
    /// Directories to scan (not recursive)
    #[arg(value_name = "DIRECTORY")]
    pub directories: Vec<PathBuf>,

    /// CSV report to append to
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// File extension to include; may be repeated (default: jpg, png)
    #[arg(short, long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Text written for fields that are not available
    #[arg(long, value_name = "TEXT")]
    pub missing_value: Option<String>,

    /// Truncate an existing report instead of appending to it
    #[arg(long)]
    pub overwrite: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Additional configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
