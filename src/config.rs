use clap::{Parser, ValueEnum};
use std::str::FromStr;

use crate::types::ConvertOptions;

/// Command-line arguments for converting VOC XML annotations to Create ML JSON.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct Args {
    /// Directory containing the VOC XML annotation files
    #[arg(short = 'd', long = "xml_dir", default_value = "AllAnnotations")]
    pub xml_dir: String,

    /// Path of the JSON document to write
    #[arg(short = 'o', long = "output", default_value = "annotations.json")]
    pub output: String,

    /// Number of distinct labels the dataset must contain
    #[arg(long = "num_classes", default_value_t = 5, value_parser = validate_num_classes)]
    pub num_classes: usize,

    /// Formula used for the vertical center of each box
    #[arg(long = "center_y", value_enum, default_value = "corrected")]
    pub center_y: CenterY,
}

impl Args {
    pub fn options(&self) -> ConvertOptions {
        ConvertOptions {
            expected_classes: self.num_classes,
            center_y: self.center_y,
        }
    }
}

/// How the vertical center of a box is derived from its corners.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum CenterY {
    /// (ymin + ymax) / 2
    #[default]
    Corrected,
    /// (ymin + xmax) / 2, as produced by the earlier annotation export
    Legacy,
}

// The label universe cannot be empty
pub fn validate_num_classes(s: &str) -> Result<usize, String> {
    match usize::from_str(s) {
        Ok(val) if val >= 1 => Ok(val),
        _ => Err("NUM_CLASSES must be a positive integer".to_string()),
    }
}
