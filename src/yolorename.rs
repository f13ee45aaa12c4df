use clap::Parser;
use log::{error, info};

use yolosplit::{rename_sequential, RenameConfig};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = RenameConfig::parse();

    info!("Renaming images in {}...", config.img_dir.display());

    match rename_sequential(&config) {
        Ok(count) => info!("Renamed {} images; labels followed their images.", count),
        Err(e) => {
            error!("Failed to rename dataset: {}", e);
            std::process::exit(1);
        }
    }
}
