use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

use crate::config::CenterY;

// Extension of annotation files picked up from the input directory
pub const ANNOTATION_EXTENSION: &str = "xml";

// Extension given to every image referenced in the output document
pub const IMAGE_EXTENSION: &str = "png";

pub const DEFAULT_EXPECTED_CLASSES: usize = 5;

// One labeled rectangle inside an annotation record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub label: String,
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl Region {
    // Sizes are widened to i128 so any pair of i64 corners fits
    pub fn width(&self) -> i128 {
        self.max_x as i128 - self.min_x as i128
    }

    pub fn height(&self) -> i128 {
        self.max_y as i128 - self.min_y as i128
    }

    pub fn center_x(&self) -> f64 {
        midpoint(self.min_x, self.max_x)
    }

    pub fn center_y(&self, mode: CenterY) -> f64 {
        match mode {
            CenterY::Corrected => midpoint(self.min_y, self.max_y),
            CenterY::Legacy => midpoint(self.min_y, self.max_x),
        }
    }

    pub fn coordinates(&self, mode: CenterY) -> Coordinates {
        Coordinates {
            x: self.center_x(),
            y: self.center_y(mode),
            width: self.width(),
            height: self.height(),
        }
    }
}

fn midpoint(a: i64, b: i64) -> f64 {
    (a as f64 + b as f64) / 2.0
}

// The annotation of a single image, parsed from one XML file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationRecord {
    pub source_file_name: String,
    pub image_width: i64,
    pub image_height: i64,
    pub regions: Vec<Region>,
}

impl AnnotationRecord {
    /// Name of the image in the output document: the source name with a `.png` extension.
    pub fn output_image_name(&self) -> String {
        Path::new(&self.source_file_name)
            .with_extension(IMAGE_EXTENSION)
            .to_string_lossy()
            .into_owned()
    }

    pub fn to_entry(&self, mode: CenterY) -> ImageEntry {
        ImageEntry {
            image: self.output_image_name(),
            annotations: self
                .regions
                .iter()
                .map(|region| AnnotationEntry {
                    label: region.label.clone(),
                    coordinates: region.coordinates(mode),
                })
                .collect(),
        }
    }
}

// Every record parsed from one input directory, plus its label universe
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub records: Vec<AnnotationRecord>,
    pub labels: BTreeSet<String>,
}

// Output document entry for one image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub image: String,
    pub annotations: Vec<AnnotationEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationEntry {
    pub label: String,
    pub coordinates: Coordinates,
}

// Box center and size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
    pub width: i128,
    pub height: i128,
}

/// Library-level knobs for a conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    pub expected_classes: usize,
    pub center_y: CenterY,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            expected_classes: DEFAULT_EXPECTED_CLASSES,
            center_y: CenterY::default(),
        }
    }
}

// Struct to hold conversion statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub files_converted: usize,
    pub regions_written: usize,
    pub labels: BTreeSet<String>,
}

impl ConversionSummary {
    pub fn from_corpus(corpus: &Corpus) -> Self {
        Self {
            files_converted: corpus.records.len(),
            regions_written: corpus.records.iter().map(|r| r.regions.len()).sum(),
            labels: corpus.labels.clone(),
        }
    }

    pub fn print_summary(&self) {
        log::info!("=== Conversion Summary ===");
        log::info!("Annotation files converted: {}", self.files_converted);
        log::info!("Regions written: {}", self.regions_written);
        log::info!(
            "Labels ({}): {}",
            self.labels.len(),
            self.labels.iter().cloned().collect::<Vec<_>>().join(", ")
        );

        if self.files_converted > 0 && self.regions_written == 0 {
            log::warn!("No regions found in any annotation file");
        }
    }
}
