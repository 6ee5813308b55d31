use log::{error, info, warn};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::{ConversionOptions, ErrorPolicy};
use crate::error::{ConvertError, Result};
use crate::io::list_annotation_files;
use crate::label_map::LabelMap;
use crate::types::{AnnotationRecord, BndBox, NormalizedBox, ProcessingStats};
use crate::utils::{create_output_directory, format_coordinate, read_annotation};

/// Convert every annotation of one class directory to YOLO label files.
///
/// Reads `annot_dir/partition/class_code/*` and writes
/// `<output_dir>/<class_code>/<stem>.txt` for each file. A missing class
/// directory is logged and counted, not treated as an error.
pub fn convert_annotation(
    annot_dir: &Path,
    partition: &str,
    class_code: &str,
    label_map: &LabelMap,
    options: &ConversionOptions,
    stats: &mut ProcessingStats,
) -> Result<()> {
    let cls_dir = annot_dir.join(partition).join(class_code);
    info!("Processing: {}", cls_dir.display());

    if !cls_dir.is_dir() {
        warn!("Class directory not found: {}", cls_dir.display());
        stats.increment_missing_class_dir();
        return Ok(());
    }

    let output_dir = create_output_directory(&options.output_dir.join(class_code))?;

    for xml_path in list_annotation_files(&cls_dir)? {
        info!(" file: {}", xml_path.display());
        stats.increment_total();

        match process_annotation(&xml_path, &output_dir, label_map, options, stats) {
            Ok(()) => stats.increment_successful(),
            Err(e) if e.is_per_file() && options.error_policy == ErrorPolicy::Skip => {
                error!("Skipping {}: {}", xml_path.display(), e);
                stats.increment_failed();
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

/// Parse one XML annotation and write its YOLO label file into `labels_dir`.
///
/// The label file is only created once the XML parsed, so a skipped file leaves
/// no output behind.
pub fn process_annotation(
    xml_path: &Path,
    labels_dir: &Path,
    label_map: &LabelMap,
    options: &ConversionOptions,
    stats: &mut ProcessingStats,
) -> Result<()> {
    let record = read_annotation(xml_path)?;
    let yolo_data = convert_to_yolo_format(&record, label_map, options.precision, stats);

    let sanitized_name =
        sanitize_filename::sanitize(xml_path.file_stem().unwrap_or_default().to_string_lossy());
    // Stems may keep dots of their own (`img.v1`)
    let label_output_path = labels_dir.join(format!("{}.txt", sanitized_name));

    let file = File::create(&label_output_path)
        .map_err(|e| ConvertError::io(&label_output_path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(yolo_data.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| ConvertError::io(&label_output_path, e))?;

    Ok(())
}

/// Convert a parsed annotation to YOLO bounding-box lines.
///
/// Objects whose label is neither a known code nor a known class name are
/// logged and left out; the remaining objects are unaffected. ImageNet has no
/// `difficult` flag, so no object is filtered on it.
pub fn convert_to_yolo_format(
    record: &AnnotationRecord,
    label_map: &LabelMap,
    precision: Option<usize>,
    stats: &mut ProcessingStats,
) -> String {
    let mut yolo_data = String::with_capacity(record.objects.len() * 64);

    for object in &record.objects {
        let class_id = match label_map.resolve(&object.name) {
            Some(class_id) => class_id,
            None => {
                warn!("Inexistent class {}", object.name);
                stats.increment_skipped_unresolved();
                continue;
            }
        };

        let bbox = normalize_box(record.width(), record.height(), &object.bndbox);
        yolo_data.push_str(&format!(
            "{} {} {} {} {}\n",
            class_id,
            format_coordinate(bbox.x_center, precision),
            format_coordinate(bbox.y_center, precision),
            format_coordinate(bbox.width, precision),
            format_coordinate(bbox.height, precision)
        ));
        stats.increment_objects_written();
    }

    yolo_data
}

/// Encode an absolute pixel box as YOLO center/size fractions of the image.
///
/// Nothing is clamped: coordinates outside the image give values outside `[0, 1]`.
pub fn normalize_box(image_width: u32, image_height: u32, bndbox: &BndBox) -> NormalizedBox {
    let w = image_width as f64;
    let h = image_height as f64;

    NormalizedBox {
        x_center: (bndbox.xmin + bndbox.xmax) / 2.0 / w,
        y_center: (bndbox.ymin + bndbox.ymax) / 2.0 / h,
        width: (bndbox.xmax - bndbox.xmin) / w,
        height: (bndbox.ymax - bndbox.ymin) / h,
    }
}
