use log::{info, warn};
use std::path::Path;

use crate::config::{Args, ConversionOptions};
use crate::conversion::convert_annotation;
use crate::error::Result;
use crate::io::create_dataset_yaml;
use crate::label_map::LabelMap;
use crate::types::ProcessingStats;
use crate::utils::{create_output_directory, create_progress_bar};

/// Main conversion pipeline driven by the command-line arguments
pub fn process_dataset(args: &Args) -> Result<ProcessingStats> {
    let label_map_path = args.label_map_path();
    info!("Loading class table from {}", label_map_path.display());
    let label_map = LabelMap::from_file(&label_map_path)?;
    info!("Loaded {} classes.", label_map.len());

    let class_codes: Vec<String> = if args.class_codes.is_empty() {
        label_map.codes().into_iter().map(String::from).collect()
    } else {
        for code in &args.class_codes {
            if label_map.code_to_index(code).is_none() {
                warn!("Class code {} is not in the class table", code);
            }
        }
        args.class_codes.clone()
    };

    let options = args.conversion_options();
    let stats = convert_classes(
        &args.annotation_dir(),
        args.partition.as_str(),
        &class_codes,
        &label_map,
        &options,
    )?;

    if args.write_yaml {
        info!("Creating dataset.yaml file...");
        let yaml_path = create_dataset_yaml(&options.output_dir, &args.data_dir(), &label_map)?;
        info!("Wrote {}", yaml_path.display());
    }

    stats.print_summary();
    info!("Conversion process completed successfully.");
    Ok(stats)
}

/// Convert the given class directories one after another.
pub fn convert_classes(
    annot_dir: &Path,
    partition: &str,
    class_codes: &[String],
    label_map: &LabelMap,
    options: &ConversionOptions,
) -> Result<ProcessingStats> {
    create_output_directory(&options.output_dir)?;

    let mut stats = ProcessingStats::new();
    let pb = create_progress_bar(class_codes.len() as u64, partition);
    for class_code in class_codes {
        if let Err(e) = convert_annotation(
            annot_dir,
            partition,
            class_code,
            label_map,
            options,
            &mut stats,
        ) {
            pb.abandon_with_message(format!("Failed on class {}", class_code));
            return Err(e);
        }
        pb.inc(1);
    }
    pb.finish_with_message(format!("{} processing complete", partition));

    Ok(stats)
}
