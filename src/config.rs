use crate::cli::Args;
use crate::error::AppError;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;

const ENV_PREFIX: &str = "EXIF_REPORT";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub scan_directories: Vec<PathBuf>,
    pub output_path: PathBuf,
    pub allowed_extensions: HashSet<String>,
    pub missing_value: String,
    pub overwrite: bool,
    pub log_level: String,
}

impl AppConfig {
    /// Layers built-in defaults, `config/` files, an explicit config file,
    /// `EXIF_REPORT_*` environment variables and finally command-line flags.
    pub fn new(args: &Args) -> Result<Self, AppError> {
        let env = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            .set_default("output_path", "ImageMetadata.csv")?
            .set_default("allowed_extensions", vec!["jpg", "png"])?
            .set_default("missing_value", "None")?
            .set_default("overwrite", false)?
            .set_default("log_level", "info")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(File::with_name("config/local").required(false));

        if let Some(path) = &args.config {
            builder = builder.add_source(File::from(path.as_path()).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("scan_directories")
                .with_list_parse_key("allowed_extensions"),
        );

        if !args.directories.is_empty() {
            let dirs: Vec<String> = args
                .directories
                .iter()
                .map(|d| d.to_string_lossy().into_owned())
                .collect();
            builder = builder.set_override("scan_directories", dirs)?;
        }
        if !args.extensions.is_empty() {
            builder = builder.set_override("allowed_extensions", args.extensions.clone())?;
        }
        if args.overwrite {
            builder = builder.set_override("overwrite", true)?;
        }
        builder = builder
            .set_override_option(
                "output_path",
                args.output.as_ref().map(|p| p.to_string_lossy().into_owned()),
            )?
            .set_override_option("missing_value", args.missing_value.clone())?
            .set_override_option("log_level", args.log_level.clone())?;

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.normalized()
    }

    fn normalized(mut self) -> Result<Self, AppError> {
        if self.scan_directories.is_empty() {
            return Err(AppError::NoScanDirectories);
        }
        self.allowed_extensions = self
            .allowed_extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        Ok(self)
    }
}
