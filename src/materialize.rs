use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::config::TransferMode;
use crate::types::{OutputDirs, SamplePair};
use crate::utils::{create_output_directory, create_progress_bar};

/// Set up the `{train,val,test}/{img,lbs}` directory tree under `out_root`.
/// Creation is idempotent; existing directories are reused as-is.
pub fn setup_output_directories(out_root: &Path) -> io::Result<OutputDirs> {
    let train_images_dir = create_output_directory(&out_root.join("train/img"))?;
    let train_labels_dir = create_output_directory(&out_root.join("train/lbs"))?;
    let val_images_dir = create_output_directory(&out_root.join("val/img"))?;
    let val_labels_dir = create_output_directory(&out_root.join("val/lbs"))?;
    let test_images_dir = create_output_directory(&out_root.join("test/img"))?;
    let test_labels_dir = create_output_directory(&out_root.join("test/lbs"))?;

    Ok(OutputDirs {
        train_images_dir,
        train_labels_dir,
        val_images_dir,
        val_labels_dir,
        test_images_dir,
        test_labels_dir,
    })
}

/// Copy or move a single file.
///
/// Copy keeps the source in place and overwrites an existing destination.
/// Move renames the file, falling back to copy-and-delete when a direct
/// rename fails, e.g. across filesystems.
pub fn transfer(src: &Path, dst: &Path, mode: TransferMode) -> io::Result<()> {
    match mode {
        TransferMode::Copy => {
            fs::copy(src, dst)?;
            Ok(())
        }
        TransferMode::Move => match fs::rename(src, dst) {
            Ok(()) => Ok(()),
            Err(_) => {
                fs::copy(src, dst)?;
                fs::remove_file(src)
            }
        },
    }
}

/// Transfer every pair of one split into its `img/` and `lbs/` directories,
/// file names preserved.
///
/// There is no transactionality across files: a failure mid-split leaves a
/// partially populated tree. Copy mode can simply be rerun; move mode has
/// already emptied part of the source directories and cannot.
pub fn dump_split(
    label: &str,
    items: &[SamplePair],
    images_dir: &Path,
    labels_dir: &Path,
    mode: TransferMode,
) -> io::Result<()> {
    let pb = create_progress_bar(items.len() as u64, label);
    for pair in items {
        let image_name = pair.image_path.file_name().unwrap_or_default();
        let label_name = pair.label_path.file_name().unwrap_or_default();
        transfer(&pair.image_path, &images_dir.join(image_name), mode)?;
        transfer(&pair.label_path, &labels_dir.join(label_name), mode)?;
        pb.inc(1);
    }
    pb.finish_with_message(format!("{} transfer complete", label));
    Ok(())
}

/// Create the dataset.yaml file the training side points at, naming the split
/// image directories and the class list.
pub fn create_dataset_yaml(out_root: &Path, class_names: &[String]) -> io::Result<()> {
    let dataset_yaml_path = out_root.join("dataset.yaml");
    let mut dataset_yaml = BufWriter::new(File::create(&dataset_yaml_path)?);
    let absolute_path = fs::canonicalize(out_root)?;
    let mut yaml_content = format!(
        "path: {}\ntrain: train/img\nval: val/img\ntest: test/img\n",
        absolute_path.to_string_lossy()
    );
    yaml_content.push_str("\nnames:\n");
    for (id, name) in class_names.iter().enumerate() {
        yaml_content.push_str(&format!("    {}: {}\n", id, name));
    }
    dataset_yaml.write_all(yaml_content.as_bytes())
}
