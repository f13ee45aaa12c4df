//! Stratified dataset splitting for YOLO-style object detection training
//!
//! This library pairs images with their label files, classifies each pair as
//! negative (no annotations) or positive, and partitions the dataset into
//! train/val/test sets while keeping the class balance of every split close
//! to the whole dataset's.

pub mod config;
pub mod dataset;
pub mod materialize;
pub mod pairing;
pub mod rename;
pub mod split;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use config::{NegativeMode, RenameConfig, SplitConfig, TransferMode};
pub use dataset::run_split;
pub use materialize::{dump_split, setup_output_directories, transfer};
pub use pairing::collect_pairs;
pub use rename::rename_sequential;
pub use split::stratified_split;
pub use types::{OutputDirs, PairingOutcome, SamplePair, SplitData};
