use clap::Parser;
use log::{error, info};

use yolosplit::{run_split, SplitConfig};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = SplitConfig::parse();

    info!("Starting the dataset split...");

    if let Err(e) = run_split(&config) {
        error!("Failed to split dataset: {}", e);
        std::process::exit(1);
    }
}
