use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// Command-line arguments for splitting an image/label dataset into
/// train/val/test subsets.
#[derive(Parser, Debug, Clone)]
#[command(name = "yolosplit", version, long_about = None)]
pub struct SplitConfig {
    /// Directory containing the source images
    #[arg(short = 'i', long = "img_dir")]
    pub img_dir: PathBuf,

    /// Directory containing the label txt files
    #[arg(short = 'l', long = "lbs_dir")]
    pub lbs_dir: PathBuf,

    /// Root directory the split dataset is written under
    #[arg(short = 'o', long = "out_root", default_value = "dataset")]
    pub out_root: PathBuf,

    /// Proportion of each class to use for training
    #[arg(long = "train_size", default_value_t = 0.7, value_parser = validate_size)]
    pub train_size: f64,

    /// Proportion of each class to use for validation
    #[arg(long = "val_size", default_value_t = 0.2, value_parser = validate_size)]
    pub val_size: f64,

    /// Proportion of each class to use for testing
    #[arg(long = "test_size", default_value_t = 0.1, value_parser = validate_size)]
    pub test_size: f64,

    /// How files are transferred into the output tree
    #[arg(long = "transfer", value_enum, default_value = "copy")]
    pub transfer: TransferMode,

    /// Seed for the shuffles
    #[arg(long = "seed", default_value_t = 42)]
    pub seed: u64,

    /// How unannotated images are detected
    #[arg(long = "negative_mode", value_enum, default_value = "content")]
    pub negative_mode: NegativeMode,

    /// First stem index treated as negative in index-range mode
    #[arg(long = "neg_start", default_value_t = 0)]
    pub neg_start: u64,

    /// Last stem index (inclusive) treated as negative in index-range mode
    #[arg(long = "neg_end", default_value_t = 75)]
    pub neg_end: u64,

    /// Fail on stems without a trailing numeric index in index-range mode
    /// instead of falling back to label-content classification
    #[arg(long = "strict_index")]
    pub strict_index: bool,

    /// Image extensions to scan for; defaults to the built-in format list
    #[arg(long = "image_ext", use_value_delimiter = true)]
    pub image_exts: Vec<String>,

    /// Class names written to dataset.yaml; the file is skipped when empty
    #[arg(long = "names", use_value_delimiter = true)]
    pub class_names: Vec<String>,
}

// How a pair's files reach the output tree
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum TransferMode {
    /// Copy files, keeping the source directories intact
    Copy,
    /// Move files out of the source directories
    Move,
}

// How a pair is classified as negative (unannotated)
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum NegativeMode {
    /// Negative when the label file is empty or whitespace-only
    Content,
    /// Negative when the trailing index of the stem falls in the configured range
    IndexRange,
}

/// Command-line arguments for renaming image/label pairs into a zero-padded
/// canonical sequence.
#[derive(Parser, Debug, Clone)]
#[command(name = "yolorename", version, long_about = None)]
pub struct RenameConfig {
    /// Directory containing the source images
    #[arg(short = 'i', long = "img_dir")]
    pub img_dir: PathBuf,

    /// Directory containing the label txt files
    #[arg(short = 'l', long = "lbs_dir")]
    pub lbs_dir: PathBuf,

    /// Prefix for the new file stems
    #[arg(long = "prefix", default_value = "img_")]
    pub prefix: String,

    /// Index assigned to the first image
    #[arg(long = "start", default_value_t = 0)]
    pub start: u64,

    /// Zero-padding width for the index
    #[arg(long = "pad", default_value_t = 3)]
    pub pad: usize,

    /// Image extensions to scan for; defaults to the built-in format list
    #[arg(long = "image_ext", use_value_delimiter = true)]
    pub image_exts: Vec<String>,
}

// Validate that the size is between 0.0 and 1.0
pub fn validate_size(s: &str) -> Result<f64, String> {
    match f64::from_str(s) {
        Ok(val) if (0.0..=1.0).contains(&val) => Ok(val),
        _ => Err("SIZE must be between 0.0 and 1.0".to_string()),
    }
}
