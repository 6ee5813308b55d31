use glob::{glob_with, MatchOptions, Pattern};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};
use crate::label_map::LabelMap;

/// List the files of a class directory in a stable order.
///
/// Hidden files such as `.DS_Store` are not listed.
pub fn list_annotation_files(cls_dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!("{}/*", Pattern::escape(&cls_dir.to_string_lossy()));
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..Default::default()
    };
    let mut files: Vec<PathBuf> = glob_with(&pattern, options)?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                log::warn!("Unreadable entry in {}: {}", cls_dir.display(), e);
                None
            }
        })
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    Ok(files)
}

/// Create the dataset.yaml file for YOLO training
///
/// Image paths point at `data_dir`, the `Data/<task>` tree next to the annotations.
/// Labels live under `output_dir/<code>/` instead. YOLO loaders find a label by
/// replacing `images` with `labels` in the image path, so the user has to arrange
/// (e.g. by symlinks) `<path>/images/<partition>/<code>/` next to
/// `<path>/labels/<partition>/<code>/` before training. The file starts with a
/// comment block describing this.
pub fn create_dataset_yaml(
    output_dir: &Path,
    data_dir: &Path,
    label_map: &LabelMap,
) -> Result<PathBuf> {
    let dataset_yaml_path = output_dir.join("dataset.yaml");
    let data_path = data_dir
        .canonicalize()
        .unwrap_or_else(|_| data_dir.to_path_buf());

    let labels_path = output_dir
        .canonicalize()
        .unwrap_or_else(|_| output_dir.to_path_buf());

    let mut yaml_content = format!(
        "# Labels were written to {}/<code>/<stem>.txt\n\
         # YOLO looks up a label by replacing 'images' with 'labels' in the image path.\n\
         # Arrange images as <path>/images/<partition>/<code>/ and labels as\n\
         # <path>/labels/<partition>/<code>/, then set path/train/val below accordingly.\n",
        labels_path.to_string_lossy()
    );
    yaml_content.push_str(&format!(
        "path: {}\ntrain: train\nval: val\n",
        data_path.to_string_lossy()
    ));
    yaml_content.push_str("\nnames:\n");
    for (id, name) in label_map.names_by_index() {
        yaml_content.push_str(&format!("    {}: {}\n", id, name));
    }

    let file =
        File::create(&dataset_yaml_path).map_err(|e| ConvertError::io(&dataset_yaml_path, e))?;
    let mut dataset_yaml = BufWriter::new(file);
    dataset_yaml
        .write_all(yaml_content.as_bytes())
        .and_then(|_| dataset_yaml.flush())
        .map_err(|e| ConvertError::io(&dataset_yaml_path, e))?;

    Ok(dataset_yaml_path)
}
