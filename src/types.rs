use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::OnceLock;

// Supported image formats
pub const IMG_FORMATS: &[&str] = &[
    "bmp", "dng", "jpeg", "jpg", "mpo", "png", "tif", "tiff", "webp", "pfm",
];

// Extension of the plain-text label files paired with each image
pub const LABEL_EXTENSION: &str = "txt";

// Precomputed HashSet of image extensions for fast lookup
pub static IMAGE_EXTENSIONS_SET: OnceLock<HashSet<String>> = OnceLock::new();

/// Get the default image extensions set
pub fn get_image_extensions_set() -> &'static HashSet<String> {
    IMAGE_EXTENSIONS_SET.get_or_init(|| IMG_FORMATS.iter().map(|ext| ext.to_lowercase()).collect())
}

/// Build the extension set used for image discovery: the configured list,
/// lowercased and with any leading dot stripped, or the built-in format list
/// when no extensions are configured.
pub fn image_extension_set(custom: &[String]) -> HashSet<String> {
    if custom.is_empty() {
        get_image_extensions_set().clone()
    } else {
        custom
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_lowercase())
            .collect()
    }
}

/// One image with its label file and negativity classification.
///
/// Both paths share a stem; the label file is guaranteed to exist once the
/// pairing step has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplePair {
    pub image_path: PathBuf,
    pub label_path: PathBuf,
    pub is_negative: bool,
}

impl SamplePair {
    /// Shared base name of the image and label files
    pub fn stem(&self) -> String {
        self.image_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

// Result of the pairing step: the classified pairs plus how many label files
// had to be synthesized for images without one
#[derive(Debug)]
pub struct PairingOutcome {
    pub pairs: Vec<SamplePair>,
    pub labels_created: usize,
}

// Struct to hold the split datasets for training, validation, and testing
#[derive(Debug, Clone)]
pub struct SplitData {
    pub train: Vec<SamplePair>,
    pub val: Vec<SamplePair>,
    pub test: Vec<SamplePair>,
}

/// Count the negative pairs in a slice
pub fn negative_count(pairs: &[SamplePair]) -> usize {
    pairs.iter().filter(|p| p.is_negative).count()
}

// Struct to hold the paths to the output directories for the train/val/test splits
pub struct OutputDirs {
    pub train_images_dir: PathBuf,
    pub train_labels_dir: PathBuf,
    pub val_images_dir: PathBuf,
    pub val_labels_dir: PathBuf,
    pub test_images_dir: PathBuf,
    pub test_labels_dir: PathBuf,
}
