use serde::Deserialize;

// One row of the ImageNet devkit class table, with a zero-based index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEntry {
    pub code: String,
    pub index: usize,
    pub class_name: String,
}

// The `<size>` element of an annotation
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

// The `<bndbox>` element of an object, in absolute pixel coordinates
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct BndBox {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

// An `<object>` element; `name` is either a synset code or a class name
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ObjectBox {
    pub name: String,
    pub bndbox: BndBox,
}

// The annotation of a single image as stored in ImageNet's XML files
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AnnotationRecord {
    pub size: ImageSize,
    #[serde(rename = "object", default)]
    pub objects: Vec<ObjectBox>,
}

impl AnnotationRecord {
    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }
}

// A box in YOLO encoding, every value a fraction of the image dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedBox {
    pub x_center: f64,
    pub y_center: f64,
    pub width: f64,
    pub height: f64,
}

// Struct to hold processing statistics
#[derive(Debug, Default, Clone)]
pub struct ProcessingStats {
    pub total_files_processed: usize,
    pub successful_conversions: usize,
    pub failed_conversions: usize,
    pub objects_written: usize,
    pub skipped_unresolved_objects: usize,
    pub missing_class_dirs: usize,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_total(&mut self) {
        self.total_files_processed += 1;
    }

    pub fn increment_successful(&mut self) {
        self.successful_conversions += 1;
    }

    pub fn increment_failed(&mut self) {
        self.failed_conversions += 1;
    }

    pub fn increment_objects_written(&mut self) {
        self.objects_written += 1;
    }

    pub fn increment_skipped_unresolved(&mut self) {
        self.skipped_unresolved_objects += 1;
    }

    pub fn increment_missing_class_dir(&mut self) {
        self.missing_class_dirs += 1;
    }

    pub fn print_summary(&self) {
        log::info!("=== Processing Summary ===");
        log::info!("Total files processed: {}", self.total_files_processed);
        log::info!("Successful conversions: {}", self.successful_conversions);
        log::info!("Failed conversions: {}", self.failed_conversions);
        log::info!("Objects written: {}", self.objects_written);
        log::info!(
            "Skipped objects (inexistent class): {}",
            self.skipped_unresolved_objects
        );

        let total_skipped =
            self.failed_conversions + self.skipped_unresolved_objects + self.missing_class_dirs;
        if total_skipped > 0 {
            log::warn!(
                "Skipped {} item(s) (failed files: {}, inexistent classes: {}, missing class dirs: {})",
                total_skipped,
                self.failed_conversions,
                self.skipped_unresolved_objects,
                self.missing_class_dirs
            );
        }
    }
}
