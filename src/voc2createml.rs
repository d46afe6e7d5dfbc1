use clap::Parser;

use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

use voc2createml::{convert_directory, Args};

fn main() -> ExitCode {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let dirname = PathBuf::from(&args.xml_dir);
    if !dirname.is_dir() {
        error!("The specified xml_dir does not exist: {}", args.xml_dir);
        return ExitCode::FAILURE;
    }

    info!("Starting the conversion process...");

    match convert_directory(&dirname, &PathBuf::from(&args.output), &args.options()) {
        Ok(summary) => {
            summary.print_summary();
            info!("Conversion process completed successfully.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to convert annotations: {}", e);
            ExitCode::FAILURE
        }
    }
}
