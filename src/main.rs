use clap::Parser;

use log::{error, info};

use imagenet2yolo::{process_dataset, Args};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let root = args.root_path();
    if !root.exists() {
        error!("The specified root_dir does not exist: {}", args.root_dir);
        std::process::exit(1);
    }

    info!("Starting the conversion process...");

    if let Err(e) = process_dataset(&args) {
        error!("Failed to convert annotations: {}", e);
        std::process::exit(1);
    }
}
