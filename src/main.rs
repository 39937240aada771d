use anyhow::Result;
use clap::Parser;
use exif_report::cli::Args;
use exif_report::config::AppConfig;
use log::info;

fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::new(&args)?;

    env_logger::Builder::new()
        .filter_level(config.log_level.parse().unwrap_or(log::LevelFilter::Info))
        .init();

    info!("Starting exif-report");

    let summary = exif_report::run(&config)?;
    println!(
        "Processed {} files, skipped {}",
        summary.processed, summary.skipped
    );

    info!("exif-report finished");
    Ok(())
}
