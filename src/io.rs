use log::debug;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::CenterY;
use crate::error::{ConvertError, Result};
use crate::types::{AnnotationRecord, ImageEntry};
use crate::utils::is_annotation_file;

// Indentation of the written document
const JSON_INDENT: &[u8] = b"    ";

/// List the annotation files directly inside `dirname`, sorted by file name.
///
/// Sorting compares plain file names, so `image10.xml` comes before `image2.xml`.
pub fn list_annotation_files(dirname: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dirname).map_err(|e| ConvertError::io(dirname, e))? {
        let entry = entry.map_err(|e| ConvertError::io(dirname, e))?;
        let path = entry.path();
        if is_annotation_file(&path) {
            files.push(path);
        } else {
            debug!("Skipping {}", path.display());
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Build the output document entries, preserving record and region order.
pub fn to_entries(records: &[AnnotationRecord], center_y: CenterY) -> Vec<ImageEntry> {
    records.iter().map(|record| record.to_entry(center_y)).collect()
}

/// Render `value` as JSON with four-space indentation.
pub fn to_pretty_writer<W: Write, T: Serialize + ?Sized>(
    writer: W,
    value: &T,
) -> serde_json::Result<()> {
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    value.serialize(&mut serializer)
}

/// Write the records to `output_path` as a single JSON array.
pub fn write_annotations(
    records: &[AnnotationRecord],
    center_y: CenterY,
    output_path: &Path,
) -> Result<()> {
    let entries = to_entries(records, center_y);
    let file = File::create(output_path).map_err(|e| ConvertError::io(output_path, e))?;
    let mut writer = BufWriter::new(file);
    to_pretty_writer(&mut writer, &entries).map_err(|source| ConvertError::Json {
        path: output_path.to_path_buf(),
        source,
    })?;
    writer
        .flush()
        .map_err(|e| ConvertError::io(output_path, e))
}
