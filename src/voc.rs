//! Pascal VOC annotation schema
//!
//! Only the fields the converter consumes are declared. Every declared field is
//! required; integers are kept as text here and parsed in [`parse_record`] so a
//! malformed value can be reported together with its field name.
//!
//! All `<object>` elements of a document must be adjacent. `serde-xml-rs`
//! rejects a document whose objects are split by another element (for example
//! `<object>`, `<size>`, `<object>`) with a `duplicate field` error.

use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{ConvertError, Result};
use crate::types::{AnnotationRecord, Region};

#[derive(Debug, Clone, Deserialize)]
pub struct Annotation {
    pub filename: String,
    pub size: Size,
    #[serde(rename = "object", default)]
    pub objects: Vec<Object>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Size {
    pub width: String,
    pub height: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Object {
    pub name: String,
    pub bndbox: BndBox,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BndBox {
    pub xmin: String,
    pub ymin: String,
    pub xmax: String,
    pub ymax: String,
}

/// Parse the XML document at `path` into an [`AnnotationRecord`].
pub fn parse_record(path: &Path) -> Result<AnnotationRecord> {
    let content = fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
    let record = parse_record_str(&content, path)?;
    log_record(&record);
    Ok(record)
}

/// Parse XML text; `path` is only used for error reporting.
pub fn parse_record_str(content: &str, path: &Path) -> Result<AnnotationRecord> {
    let annotation: Annotation =
        serde_xml_rs::from_str(content).map_err(|source| ConvertError::Xml {
            path: path.to_path_buf(),
            source,
        })?;
    annotation.into_record(path)
}

impl Annotation {
    fn into_record(self, path: &Path) -> Result<AnnotationRecord> {
        let regions = self
            .objects
            .into_iter()
            .map(|object| -> Result<Region> {
                let bndbox = &object.bndbox;
                Ok(Region {
                    min_x: parse_int(path, "bndbox/xmin", &bndbox.xmin)?,
                    min_y: parse_int(path, "bndbox/ymin", &bndbox.ymin)?,
                    max_x: parse_int(path, "bndbox/xmax", &bndbox.xmax)?,
                    max_y: parse_int(path, "bndbox/ymax", &bndbox.ymax)?,
                    label: object.name,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(AnnotationRecord {
            image_width: parse_int(path, "size/width", &self.size.width)?,
            image_height: parse_int(path, "size/height", &self.size.height)?,
            source_file_name: self.filename,
            regions,
        })
    }
}

fn parse_int(path: &Path, field: &'static str, text: &str) -> Result<i64> {
    text.trim()
        .parse()
        .map_err(|_| ConvertError::InvalidNumber {
            path: path.to_path_buf(),
            field,
            value: text.to_string(),
        })
}

fn log_record(record: &AnnotationRecord) {
    debug!(
        "{}: {}x{}, {} region(s)",
        record.source_file_name,
        record.image_width,
        record.image_height,
        record.regions.len()
    );
    for region in &record.regions {
        debug!(
            "  {} {} {} {} {}",
            region.label, region.min_x, region.min_y, region.max_x, region.max_y
        );
    }
}
