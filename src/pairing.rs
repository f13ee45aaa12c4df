use log::warn;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{NegativeMode, SplitConfig};
use crate::types::{image_extension_set, PairingOutcome, SamplePair, LABEL_EXTENSION};

/// List the image files in `dir` whose extension is in `exts`, matched
/// case-insensitively, sorted by file name for a deterministic order.
pub fn list_images(dir: &Path, exts: &HashSet<String>) -> io::Result<Vec<PathBuf>> {
    let mut images = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| exts.contains(&ext.to_lowercase()))
            .unwrap_or(false);
        if matches {
            images.push(path);
        }
    }
    images.sort();
    Ok(images)
}

/// True if the label file is missing, empty, or whitespace-only.
/// A file that cannot be read counts as empty.
pub fn is_empty_label(path: &Path) -> bool {
    if !path.exists() {
        return true;
    }
    match fs::read_to_string(path) {
        Ok(content) => content.trim().is_empty(),
        Err(e) => {
            warn!(
                "Failed to read label {} ({}), treating it as empty",
                path.display(),
                e
            );
            true
        }
    }
}

/// Parse the trailing `_`-delimited token of a stem as an index
/// ("img_007" -> 7). Returns None when the stem does not end in a number.
pub fn parse_trailing_index(stem: &str) -> Option<u64> {
    stem.rsplit('_').next().and_then(|token| token.parse().ok())
}

/// Create an empty label file if one does not exist yet.
/// Returns true when a file was written.
pub fn ensure_label_file(path: &Path) -> io::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, "")?;
    Ok(true)
}

/// Scan the image directory and build one classified pair per image.
///
/// Missing label files are created empty in a repair pass before
/// classification, so every later step sees a label file for each image; the
/// number synthesized is reported in the outcome. Fails if either source
/// directory is missing or if two images share a stem, since a shared stem
/// would map both onto one label file.
pub fn collect_pairs(config: &SplitConfig) -> io::Result<PairingOutcome> {
    for dir in [&config.img_dir, &config.lbs_dir] {
        if !dir.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("source directory does not exist: {}", dir.display()),
            ));
        }
    }

    let exts = image_extension_set(&config.image_exts);
    let images = list_images(&config.img_dir, &exts)?;

    let mut labeled = Vec::with_capacity(images.len());
    let mut seen_stems = HashSet::new();
    for image_path in images {
        let stem = image_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        if !seen_stems.insert(stem.clone()) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("duplicate stem '{}' in {}", stem, config.img_dir.display()),
            ));
        }
        let label_path = config
            .lbs_dir
            .join(format!("{}.{}", stem, LABEL_EXTENSION));
        labeled.push((image_path, label_path));
    }

    // Repair pass: every image gets a label file before anything is classified
    let mut labels_created = 0;
    for (_, label_path) in &labeled {
        if ensure_label_file(label_path)? {
            labels_created += 1;
        }
    }

    let mut pairs = Vec::with_capacity(labeled.len());
    for (image_path, label_path) in labeled {
        let is_negative = classify(&image_path, &label_path, config)?;
        pairs.push(SamplePair {
            image_path,
            label_path,
            is_negative,
        });
    }

    Ok(PairingOutcome {
        pairs,
        labels_created,
    })
}

// Classification per the configured mode. In index-range mode a stem without
// a trailing number falls back to label content for that pair only, unless
// strict_index turns the fallback into an error.
fn classify(image_path: &Path, label_path: &Path, config: &SplitConfig) -> io::Result<bool> {
    match config.negative_mode {
        NegativeMode::Content => Ok(is_empty_label(label_path)),
        NegativeMode::IndexRange => {
            let stem = image_path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default();
            match parse_trailing_index(stem) {
                Some(index) => Ok(index >= config.neg_start && index <= config.neg_end),
                None if config.strict_index => Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("stem '{}' has no trailing index", stem),
                )),
                None => Ok(is_empty_label(label_path)),
            }
        }
    }
}
