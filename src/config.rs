use clap::{Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;

/// Command-line arguments parser for converting ImageNet XML annotations to YOLO format.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct Args {
    /// Root of the ImageNet tree (the directory holding `Annotations/` and `Data/`)
    #[arg(short = 'r', long = "root_dir", default_value = "ILSVRC2015")]
    pub root_dir: String,

    /// Challenge task; selects the annotation subtree and the default class table
    #[arg(long = "task", value_enum, default_value = "det")]
    pub task: Task,

    /// Dataset partition to convert
    #[arg(long = "partition", value_enum, default_value = "train")]
    pub partition: Partition,

    /// Class table with `<code> <index> <name>` rows; defaults to the devkit file for the task
    #[arg(long = "label_map")]
    pub label_map: Option<String>,

    /// Directory receiving one label subdirectory per class code
    #[arg(short = 'o', long = "output_dir", default_value = "labels")]
    pub output_dir: String,

    /// What to do with an annotation file that is malformed or lacks required elements
    #[arg(long = "on_error", value_enum, default_value = "abort")]
    pub on_error: ErrorPolicy,

    /// Fixed number of decimals for coordinates; shortest exact form when omitted
    #[arg(long = "precision")]
    pub precision: Option<usize>,

    /// Write a dataset.yaml listing the class names into the output directory
    #[arg(long = "write_yaml")]
    pub write_yaml: bool,

    /// Class codes to convert; every code in the class table when empty
    #[arg(use_value_delimiter = true)]
    pub class_codes: Vec<String>,
}

impl Args {
    pub fn root_path(&self) -> PathBuf {
        PathBuf::from(&self.root_dir)
    }

    /// `<root>/Annotations/<task>`
    pub fn annotation_dir(&self) -> PathBuf {
        self.root_path()
            .join("Annotations")
            .join(self.task.dir_name())
    }

    /// `<root>/Data/<task>`
    pub fn data_dir(&self) -> PathBuf {
        self.root_path().join("Data").join(self.task.dir_name())
    }

    pub fn label_map_path(&self) -> PathBuf {
        match &self.label_map {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(self.task.default_label_map()),
        }
    }

    pub fn conversion_options(&self) -> ConversionOptions {
        ConversionOptions {
            output_dir: PathBuf::from(&self.output_dir),
            error_policy: self.on_error,
            precision: self.precision,
        }
    }
}

// The ILSVRC challenge the annotations belong to
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum Task {
    Det,
    ClsLoc,
}

impl Task {
    pub fn dir_name(self) -> &'static str {
        match self {
            Task::Det => "DET",
            Task::ClsLoc => "CLS-LOC",
        }
    }

    pub fn default_label_map(self) -> &'static str {
        match self {
            Task::Det => "ILSVRC2015_devkit/devkit/data/map_det.txt",
            Task::ClsLoc => "ILSVRC2015_devkit/devkit/data/map_clsloc.txt",
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum Partition {
    Train,
    Val,
}

impl Partition {
    pub fn as_str(self) -> &'static str {
        match self {
            Partition::Train => "train",
            Partition::Val => "val",
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Handling of per-file failures (malformed XML, missing elements, zero image size)
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default)]
pub enum ErrorPolicy {
    /// Stop the whole run at the first bad file
    #[default]
    Abort,
    /// Log the file, write no label for it, and continue
    Skip,
}

/// Settings the converter needs, independent of the command line.
#[derive(Debug, Clone)]
pub struct ConversionOptions {
    pub output_dir: PathBuf,
    pub error_policy: ErrorPolicy,
    pub precision: Option<usize>,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("labels"),
            error_policy: ErrorPolicy::Abort,
            precision: None,
        }
    }
}
