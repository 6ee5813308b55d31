use indicatif::{ProgressBar, ProgressStyle};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use crate::error::{ConvertError, Result};
use crate::types::AnnotationRecord;

/// Read and parse a single ImageNet XML annotation.
///
/// The file is parsed straight from a buffered stream. Missing `size`, `object/name`
/// or `bndbox` children surface as [`ConvertError::MalformedXml`], and a zero width
/// or height as [`ConvertError::InvalidImageSize`].
pub fn read_annotation(path: &Path) -> Result<AnnotationRecord> {
    let file = File::open(path).map_err(|e| ConvertError::io(path, e))?;

    let record: AnnotationRecord =
        quick_xml::de::from_reader(BufReader::new(file)).map_err(|source| {
            ConvertError::MalformedXml {
                path: path.to_path_buf(),
                source,
            }
        })?;

    if record.width() == 0 || record.height() == 0 {
        return Err(ConvertError::InvalidImageSize {
            path: path.to_path_buf(),
            width: record.width(),
            height: record.height(),
        });
    }

    Ok(record)
}

/// Format a normalized coordinate.
///
/// Without a precision the shortest decimal that reads back to the same `f64`
/// is used, always keeping a fractional part (`0.3`, `1.0`). Very small or very
/// large values use exponent notation with a signed exponent of at least two
/// digits (`2e-06`, `1e+16`).
pub fn format_coordinate(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(precision) => format!("{:.*}", precision, value),
        None => {
            let repr = format!("{:?}", value);
            match repr.split_once('e') {
                Some((mantissa, exponent)) => {
                    let (sign, digits) = match exponent.strip_prefix('-') {
                        Some(digits) => ('-', digits),
                        None => ('+', exponent),
                    };
                    format!("{}e{}{:0>2}", mantissa, sign, digits)
                }
                None => repr,
            }
        }
    }
}

/// Create a progress bar with the given length and label
pub fn create_progress_bar(len: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    let style = ProgressStyle::default_bar()
        .template(&format!(
            "{{spinner:.green}} [{}] [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} ({{eta}})",
            label
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb
}

/// Create an output directory if needed; an existing directory is kept as is.
pub fn create_output_directory(path: &Path) -> Result<std::path::PathBuf> {
    if path.is_dir() {
        log::debug!("Reusing existing directory {:?}", path);
    }
    fs::create_dir_all(path).map_err(|e| ConvertError::io(path, e))?;
    Ok(path.to_path_buf())
}
