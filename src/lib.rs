//! ImageNet to YOLO format converter
//!
//! This library converts the per-image XML annotations of the ImageNet DET and
//! CLS-LOC challenges into YOLO bounding-box label files.

pub mod config;
pub mod conversion;
pub mod dataset;
pub mod error;
pub mod io;
pub mod label_map;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use config::{Args, ConversionOptions, ErrorPolicy, Partition, Task};
pub use conversion::{convert_annotation, convert_to_yolo_format, normalize_box};
pub use dataset::{convert_classes, process_dataset};
pub use error::ConvertError;
pub use label_map::LabelMap;
pub use types::{AnnotationRecord, BndBox, NormalizedBox, ObjectBox, ProcessingStats};
