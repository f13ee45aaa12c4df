use std::fs;
use std::io;

use crate::config::RenameConfig;
use crate::pairing::list_images;
use crate::types::{image_extension_set, LABEL_EXTENSION};

/// Rename every image in the source directory into a `<prefix><index>`
/// sequence, zero-padded to the configured width, dragging each image's
/// label file along when one exists.
///
/// Images are processed in file-name order and renamed in place; extensions
/// are lowercased. A file already carrying its target name is skipped.
/// Returns the number of images renamed.
///
/// Renaming in place means a target name that collides with a file not yet
/// processed overwrites that file, so the prefix must not overlap stems still
/// present in the directory.
pub fn rename_sequential(config: &RenameConfig) -> io::Result<usize> {
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

    let mut renamed = 0;
    for (offset, image_path) in images.iter().enumerate() {
        let index = config.start + offset as u64;
        let new_stem = format!("{}{:0width$}", config.prefix, index, width = config.pad);
        let extension = image_path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_lowercase();
        let new_image_path = config.img_dir.join(format!("{}.{}", new_stem, extension));
        if *image_path != new_image_path {
            fs::rename(image_path, &new_image_path)?;
            renamed += 1;
        }

        let old_stem = image_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let old_label_path = config
            .lbs_dir
            .join(format!("{}.{}", old_stem, LABEL_EXTENSION));
        if old_label_path.exists() {
            let new_label_path = config
                .lbs_dir
                .join(format!("{}.{}", new_stem, LABEL_EXTENSION));
            if old_label_path != new_label_path {
                fs::rename(&old_label_path, &new_label_path)?;
            }
        }
    }

    Ok(renamed)
}
