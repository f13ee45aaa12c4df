use log::info;
use std::error::Error;

use crate::config::SplitConfig;
use crate::materialize::{create_dataset_yaml, dump_split, setup_output_directories};
use crate::pairing::collect_pairs;
use crate::split::{stratified_split, validate_ratios};
use crate::types::negative_count;

/// Run the full split pipeline: pair and classify, partition, materialize.
///
/// Preconditions (source directories present, ratios summing to 1.0) are
/// checked up front, before any file is touched. Transfer failures during
/// materialization propagate immediately and leave a partially populated
/// output tree behind; with copy mode the run can simply be repeated.
pub fn run_split(config: &SplitConfig) -> Result<(), Box<dyn Error>> {
    for dir in [&config.img_dir, &config.lbs_dir] {
        if !dir.exists() {
            return Err(format!("source directory does not exist: {}", dir.display()).into());
        }
    }
    validate_ratios(config.train_size, config.val_size, config.test_size)?;

    let outcome = collect_pairs(config)?;
    let total = outcome.pairs.len();
    let neg = negative_count(&outcome.pairs);
    info!("Total images: {}", total);
    info!("Negatives (empty label): {}", neg);
    info!("Positives (with annotations): {}", total - neg);
    if outcome.labels_created > 0 {
        info!(
            "Created {} empty label files for unannotated images",
            outcome.labels_created
        );
    }

    let split_data = stratified_split(
        outcome.pairs,
        config.train_size,
        config.val_size,
        config.test_size,
        config.seed,
    )?;
    for (name, items) in [
        ("train", &split_data.train),
        ("val", &split_data.val),
        ("test", &split_data.test),
    ] {
        let neg = negative_count(items);
        info!(
            "{}: {} samples (neg {}, pos {})",
            name,
            items.len(),
            neg,
            items.len() - neg
        );
    }

    let output_dirs = setup_output_directories(&config.out_root)?;
    dump_split(
        "Train",
        &split_data.train,
        &output_dirs.train_images_dir,
        &output_dirs.train_labels_dir,
        config.transfer,
    )?;
    dump_split(
        "Val",
        &split_data.val,
        &output_dirs.val_images_dir,
        &output_dirs.val_labels_dir,
        config.transfer,
    )?;
    dump_split(
        "Test",
        &split_data.test,
        &output_dirs.test_images_dir,
        &output_dirs.test_labels_dir,
        config.transfer,
    )?;

    if !config.class_names.is_empty() {
        create_dataset_yaml(&config.out_root, &config.class_names)?;
    }

    info!(
        "All files are in '{}' following the train/val/test layout.",
        config.out_root.display()
    );
    Ok(())
}
